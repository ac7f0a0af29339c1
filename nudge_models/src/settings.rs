use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SchedulerSettings {
    pub poll_interval_secs: u64,
    /// Tolerance window for the due query, one polling interval by default.
    pub window_secs: i64,
    /// Civil timezone used when rendering message bodies. Instants are
    /// stored and compared in UTC.
    pub timezone: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SmsSettings {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub scheduler: SchedulerSettings,
    pub email: EmailSettings,
    /// Absent means the SMS transport is not configured; sends then fail
    /// without a network attempt.
    pub sms: Option<SmsSettings>,
}
