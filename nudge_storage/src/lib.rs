mod memory;
mod reminder;
pub mod sqlite;
mod user;

pub use memory::{InMemoryReminderStorage, InMemoryUserDirectory};
pub use reminder::{NewReminder, ReminderStorage};
pub use user::UserDirectory;

/// Applies the bundled migrations. The daemon runs this on startup; tests
/// run it against `sqlite::memory:` pools.
pub async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
