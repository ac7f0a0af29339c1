use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use nudge_channels::{EmailSender, SmsSender, email_html, email_subject, sms_text};
use nudge_models::reminder::{Reminder, ReminderStatus};
use nudge_storage::{NewReminder, ReminderStorage};

use crate::{clock::Clock, occurrence::next_occurrence};

/// One-sweep orchestrator. Each sweep queries the due window, fires the
/// channels a due reminder asks for, applies the outcome, and spawns the
/// continuation record for recurring reminders. All collaborators are
/// injected; the dispatcher holds no state of its own between sweeps.
pub struct ReminderDispatcher {
    store: Arc<dyn ReminderStorage>,
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
    window: TimeDelta,
}

impl ReminderDispatcher {
    pub fn new(
        store: Arc<dyn ReminderStorage>,
        email: Arc<dyn EmailSender>,
        sms: Arc<dyn SmsSender>,
        clock: Arc<dyn Clock>,
        timezone: Tz,
        window: TimeDelta,
    ) -> Self {
        Self {
            store,
            email,
            sms,
            clock,
            timezone,
            window,
        }
    }

    /// A sweep never returns an error. A failed due-window query skips the
    /// whole tick and the next one retries from scratch; a reminder that
    /// fails to finalize is logged and the rest of the due set still runs.
    pub async fn sweep(&self) {
        let now = self.clock.now();
        let window_start = now - self.window;

        let due = match self.store.find_due(window_start, now).await {
            Ok(due) => due,
            Err(error) => {
                log::error!("due-window query failed, skipping sweep [error = {error:#}]");
                return;
            }
        };

        if due.is_empty() {
            return;
        }

        log::info!("dispatching due reminders [count = {}]", due.len());
        for reminder in due {
            let reminder_id = reminder.id;
            if let Err(error) = self.dispatch(reminder, now).await {
                log::error!(
                    "failed to finalize reminder [reminder_id = {reminder_id}, error = {error:#}]"
                );
            }
        }
    }

    async fn dispatch(&self, mut reminder: Reminder, now: DateTime<Utc>) -> anyhow::Result<()> {
        let email_ok = if reminder.channel.includes_email() {
            self.send_email(&reminder).await
        } else {
            false
        };
        let sms_ok = if reminder.channel.includes_sms() {
            self.send_sms(&reminder).await
        } else {
            false
        };

        if email_ok || sms_ok {
            reminder.status = ReminderStatus::Sent;
            reminder.sent_at = Some(now);
            self.schedule_continuation(&reminder).await;
        } else {
            log::warn!(
                "all channels failed for reminder [reminder_id = {}]",
                reminder.id
            );
            reminder.status = ReminderStatus::Failed;
        }

        self.store.update(reminder).await?;
        Ok(())
    }

    async fn send_email(&self, reminder: &Reminder) -> bool {
        let Some(address) = &reminder.recipient_email else {
            log::warn!(
                "reminder has no recipient email [reminder_id = {}]",
                reminder.id
            );
            return false;
        };

        let subject = email_subject(reminder);
        let body = email_html(reminder, self.timezone);
        self.email.send(address, &subject, &body).await
    }

    async fn send_sms(&self, reminder: &Reminder) -> bool {
        let Some(number) = &reminder.recipient_phone else {
            log::warn!(
                "reminder has no recipient phone [reminder_id = {}]",
                reminder.id
            );
            return false;
        };

        self.sms.send(number, &sms_text(reminder)).await
    }

    /// Spawns the next occurrence as a fresh pending record. The delivered
    /// record stays terminal; an insert failure only costs that future
    /// occurrence and is logged rather than failing the dispatch.
    async fn schedule_continuation(&self, reminder: &Reminder) {
        let Some(pattern) = reminder.recurrence else {
            return;
        };
        let Some(next_time) = next_occurrence(reminder.scheduled_time, pattern) else {
            log::warn!(
                "no next occurrence [reminder_id = {}, pattern = {pattern:?}]",
                reminder.id
            );
            return;
        };

        match self
            .store
            .insert(NewReminder::continuation(reminder, next_time))
            .await
        {
            Ok(created) => log::info!(
                "created continuation [reminder_id = {}, next_id = {}, next_time = {next_time}]",
                reminder.id,
                created.id
            ),
            Err(error) => log::error!(
                "failed to create continuation [reminder_id = {}, error = {error:#}]",
                reminder.id
            ),
        }
    }
}
