use chrono::{DateTime, Utc};

use nudge_models::reminder::{Recurrence, Reminder, ReminderChannel, ReminderStatus};

#[derive(sqlx::FromRow)]
pub struct ReminderRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub channel: String,
    pub scheduled_time: DateTime<Utc>,
    pub recurrence: Option<String>,
    pub status: String,
    pub sent_at: Option<DateTime<Utc>>,
    pub recipient_email: Option<String>,
    pub recipient_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Reminder> for ReminderRow {
    fn from(value: Reminder) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            title: value.title,
            message: value.message,
            channel: convert_channel(value.channel).to_string(),
            scheduled_time: value.scheduled_time,
            recurrence: value.recurrence.map(|r| convert_recurrence(r).to_string()),
            status: convert_status(value.status).to_string(),
            sent_at: value.sent_at,
            recipient_email: value.recipient_email,
            recipient_phone: value.recipient_phone,
            created_at: value.created_at,
        }
    }
}

impl From<ReminderRow> for Reminder {
    fn from(value: ReminderRow) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            title: value.title,
            message: value.message,
            channel: parse_channel(&value.channel),
            scheduled_time: value.scheduled_time,
            recurrence: parse_recurrence(value.recurrence.as_deref()),
            status: parse_status(&value.status),
            sent_at: value.sent_at,
            recipient_email: value.recipient_email,
            recipient_phone: value.recipient_phone,
            created_at: value.created_at,
        }
    }
}

pub fn convert_channel(channel: ReminderChannel) -> &'static str {
    match channel {
        ReminderChannel::Email => "email",
        ReminderChannel::Sms => "sms",
        ReminderChannel::Both => "both",
    }
}

pub fn parse_channel(value: &str) -> ReminderChannel {
    match value {
        "email" => ReminderChannel::Email,
        "sms" => ReminderChannel::Sms,
        "both" => ReminderChannel::Both,
        other => {
            log::warn!("unknown channel {other:?}, defaulting to email");
            ReminderChannel::Email
        }
    }
}

pub fn convert_status(status: ReminderStatus) -> &'static str {
    match status {
        ReminderStatus::Pending => "pending",
        ReminderStatus::Sent => "sent",
        ReminderStatus::Failed => "failed",
    }
}

pub fn parse_status(value: &str) -> ReminderStatus {
    match value {
        "pending" => ReminderStatus::Pending,
        "sent" => ReminderStatus::Sent,
        "failed" => ReminderStatus::Failed,
        other => {
            log::warn!("unknown status {other:?}, defaulting to pending");
            ReminderStatus::Pending
        }
    }
}

pub fn convert_recurrence(recurrence: Recurrence) -> &'static str {
    match recurrence {
        Recurrence::Daily => "daily",
        Recurrence::Weekly => "weekly",
        Recurrence::Monthly => "monthly",
        Recurrence::Yearly => "yearly",
    }
}

/// Unknown patterns are treated as "not recurring" so they can never produce
/// a continuation.
pub fn parse_recurrence(value: Option<&str>) -> Option<Recurrence> {
    match value {
        None => None,
        Some("daily") => Some(Recurrence::Daily),
        Some("weekly") => Some(Recurrence::Weekly),
        Some("monthly") => Some(Recurrence::Monthly),
        Some("yearly") => Some(Recurrence::Yearly),
        Some(other) => {
            log::warn!("unknown recurrence pattern {other:?}, treating as one-shot");
            None
        }
    }
}
