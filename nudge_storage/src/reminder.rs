use async_trait::async_trait;
use chrono::{DateTime, Utc};

use nudge_models::{
    reminder::{Recurrence, Reminder, ReminderChannel, ReminderId, ReminderStatus},
    user::{User, UserId},
};

#[derive(Debug, Clone)]
pub struct NewReminder {
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub channel: ReminderChannel,
    pub scheduled_time: DateTime<Utc>,
    pub recurrence: Option<Recurrence>,
    pub recipient_email: Option<String>,
    pub recipient_phone: Option<String>,
}

impl NewReminder {
    /// Fills recipients the caller left out from the owner's profile. After
    /// insert the recipients are fixed for the lifetime of the record.
    pub fn with_default_contacts(mut self, owner: &User) -> Self {
        self.recipient_email = self
            .recipient_email
            .or_else(|| Some(owner.email.clone()));
        self.recipient_phone = self.recipient_phone.or_else(|| owner.phone.clone());
        self
    }

    /// Next occurrence of a recurring reminder. Copies everything except the
    /// scheduled time; the source record stays terminal and untouched.
    pub fn continuation(reminder: &Reminder, scheduled_time: DateTime<Utc>) -> Self {
        Self {
            user_id: reminder.user_id,
            title: reminder.title.clone(),
            message: reminder.message.clone(),
            channel: reminder.channel,
            scheduled_time,
            recurrence: reminder.recurrence,
            recipient_email: reminder.recipient_email.clone(),
            recipient_phone: reminder.recipient_phone.clone(),
        }
    }
}

#[async_trait]
pub trait ReminderStorage: Send + Sync {
    async fn get(&self, id: ReminderId) -> anyhow::Result<Option<Reminder>>;

    async fn get_all_user_reminders(&self, user_id: UserId) -> anyhow::Result<Vec<Reminder>>;

    /// Pending reminders whose scheduled time falls inside the closed
    /// interval `[window_start, window_end]`.
    async fn find_due(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Reminder>>;

    async fn find_by_status(&self, status: ReminderStatus) -> anyhow::Result<Vec<Reminder>>;

    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder>;

    async fn update(&self, reminder: Reminder) -> anyhow::Result<Reminder>;
}
