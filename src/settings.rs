use config::{Config, ConfigError, Environment, File};

use nudge_models::settings::Settings;

/// Layered configuration: `appsettings` is the checked-in baseline,
/// `appsettings.local` overrides it on a developer machine, and `APP_`
/// prefixed environment variables (`APP_EMAIL__PASSWORD=...`) win over both.
pub fn load() -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::with_name("appsettings").required(true))
        .add_source(File::with_name("appsettings.local").required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
