mod model;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use thiserror::Error;

use model::ReminderRow;
use nudge_models::{
    reminder::{Reminder, ReminderId, ReminderStatus},
    user::UserId,
};

use crate::reminder::{NewReminder, ReminderStorage};

#[derive(Debug, Error)]
pub enum SqliteReminderError {
    #[error("reminder does not exist [reminder_id = {0}]")]
    NotFound(ReminderId),
}

pub struct SqliteReminderStorage {
    pool: SqlitePool,
}

impl SqliteReminderStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReminderStorage for SqliteReminderStorage {
    async fn get(&self, id: ReminderId) -> anyhow::Result<Option<Reminder>> {
        let row = sqlx::query_as::<_, ReminderRow>("SELECT * FROM reminders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn get_all_user_reminders(&self, user_id: UserId) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRow>(
            "SELECT * FROM reminders WHERE user_id = ? ORDER BY scheduled_time",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_due(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRow>(
            "SELECT * FROM reminders
             WHERE status = 'pending' AND scheduled_time >= ? AND scheduled_time <= ?
             ORDER BY scheduled_time",
        )
        .bind(window_start)
        .bind(window_end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_status(&self, status: ReminderStatus) -> anyhow::Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, ReminderRow>(
            "SELECT * FROM reminders WHERE status = ? ORDER BY scheduled_time",
        )
        .bind(model::convert_status(status))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        let row = sqlx::query_as::<_, ReminderRow>(
            "INSERT INTO reminders
             (user_id, title, message, channel, scheduled_time, recurrence, status,
              recipient_email, recipient_phone, created_at)
             VALUES (?, ?, ?, ?, ?, ?, 'pending', ?, ?, ?)
             RETURNING *",
        )
        .bind(reminder.user_id)
        .bind(reminder.title)
        .bind(reminder.message)
        .bind(model::convert_channel(reminder.channel))
        .bind(reminder.scheduled_time)
        .bind(reminder.recurrence.map(model::convert_recurrence))
        .bind(reminder.recipient_email)
        .bind(reminder.recipient_phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, reminder: Reminder) -> anyhow::Result<Reminder> {
        let id = reminder.id;
        let row = ReminderRow::from(reminder);
        let updated = sqlx::query_as::<_, ReminderRow>(
            "UPDATE reminders
             SET title = ?, message = ?, channel = ?, scheduled_time = ?, recurrence = ?,
                 status = ?, sent_at = ?, recipient_email = ?, recipient_phone = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(row.title)
        .bind(row.message)
        .bind(row.channel)
        .bind(row.scheduled_time)
        .bind(row.recurrence)
        .bind(row.status)
        .bind(row.sent_at)
        .bind(row.recipient_email)
        .bind(row.recipient_phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(row) => Ok(row.into()),
            None => Err(SqliteReminderError::NotFound(id).into()),
        }
    }
}
