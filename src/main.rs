use std::{sync::Arc, time::Duration};

use anyhow::Context;
use chrono::TimeDelta;
use chrono_tz::Tz;
use sqlx::sqlite::SqlitePoolOptions;

use nudge::settings;
use nudge_channels::{SmtpEmailSender, TwilioSmsSender};
use nudge_scheduler::{ReminderDispatcher, SweepDriver, UtcClock};
use nudge_storage::sqlite::SqliteReminderStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = settings::load().context("could not load settings")?;
    let timezone: Tz = settings
        .scheduler
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid scheduler.timezone: {e}"))?;

    let pool = SqlitePoolOptions::new()
        .connect(&settings.database.url)
        .await
        .with_context(|| format!("could not open database [url = {}]", settings.database.url))?;
    nudge_storage::run_migrations(&pool).await?;

    let store = Arc::new(SqliteReminderStorage::new(pool));
    let email = Arc::new(SmtpEmailSender::new(&settings.email)?);
    if settings.sms.is_none() {
        log::warn!("sms transport not configured, sms-only reminders will fail");
    }
    let sms = Arc::new(TwilioSmsSender::new(settings.sms.clone()));

    let dispatcher = Arc::new(ReminderDispatcher::new(
        store,
        email,
        sms,
        Arc::new(UtcClock),
        timezone,
        TimeDelta::seconds(settings.scheduler.window_secs),
    ));

    let driver = SweepDriver::start(
        dispatcher,
        Duration::from_secs(settings.scheduler.poll_interval_secs),
    );
    log::info!(
        "reminder sweep running [interval_secs = {}, timezone = {timezone}]",
        settings.scheduler.poll_interval_secs
    );

    tokio::signal::ctrl_c().await?;
    log::info!("shutdown signal received");
    driver.stop(Duration::from_secs(5)).await;

    Ok(())
}
