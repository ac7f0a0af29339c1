use chrono::{DateTime, Utc};

use crate::user::UserId;

pub type ReminderId = i64;

/// Delivery state of a single occurrence. `Sent` and `Failed` are terminal;
/// a recurring reminder continues through a fresh `Pending` record, never by
/// resetting an old one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReminderStatus {
    Pending,
    Sent,
    Failed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReminderChannel {
    Email,
    Sms,
    Both,
}

impl ReminderChannel {
    pub fn includes_email(self) -> bool {
        matches!(self, ReminderChannel::Email | ReminderChannel::Both)
    }

    pub fn includes_sms(self) -> bool {
        matches!(self, ReminderChannel::Sms | ReminderChannel::Both)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: ReminderId,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub channel: ReminderChannel,
    pub scheduled_time: DateTime<Utc>,
    pub recurrence: Option<Recurrence>,
    pub status: ReminderStatus,
    pub sent_at: Option<DateTime<Utc>>,
    /// Resolved when the reminder is created and fixed afterwards.
    pub recipient_email: Option<String>,
    pub recipient_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
