use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use nudge_models::{
    reminder::{Reminder, ReminderId, ReminderStatus},
    user::{User, UserId},
};

use crate::{
    reminder::{NewReminder, ReminderStorage},
    user::UserDirectory,
};

/// Hash-map store used by tests and as the reference for the trait
/// contract. Ids are assigned from a counter kept next to the map.
pub struct InMemoryReminderStorage {
    store: RwLock<(ReminderId, HashMap<ReminderId, Reminder>)>,
}

impl InMemoryReminderStorage {
    pub fn new() -> Self {
        InMemoryReminderStorage {
            store: RwLock::new((1, HashMap::new())),
        }
    }
}

impl Default for InMemoryReminderStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReminderStorage for InMemoryReminderStorage {
    async fn get(&self, id: ReminderId) -> anyhow::Result<Option<Reminder>> {
        let store = self.store.read().await;
        Ok(store.1.get(&id).cloned())
    }

    async fn get_all_user_reminders(&self, user_id: UserId) -> anyhow::Result<Vec<Reminder>> {
        let store = self.store.read().await;
        Ok(store
            .1
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_due(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Reminder>> {
        let store = self.store.read().await;
        Ok(store
            .1
            .values()
            .filter(|r| {
                r.status == ReminderStatus::Pending
                    && r.scheduled_time >= window_start
                    && r.scheduled_time <= window_end
            })
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: ReminderStatus) -> anyhow::Result<Vec<Reminder>> {
        let store = self.store.read().await;
        Ok(store
            .1
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn insert(&self, reminder: NewReminder) -> anyhow::Result<Reminder> {
        let mut store = self.store.write().await;
        let id = store.0;
        let created = Reminder {
            id,
            user_id: reminder.user_id,
            title: reminder.title,
            message: reminder.message,
            channel: reminder.channel,
            scheduled_time: reminder.scheduled_time,
            recurrence: reminder.recurrence,
            status: ReminderStatus::Pending,
            sent_at: None,
            recipient_email: reminder.recipient_email,
            recipient_phone: reminder.recipient_phone,
            created_at: Utc::now(),
        };

        store.1.insert(id, created.clone());
        store.0 += 1;

        Ok(created)
    }

    async fn update(&self, reminder: Reminder) -> anyhow::Result<Reminder> {
        let mut store = self.store.write().await;
        if !store.1.contains_key(&reminder.id) {
            anyhow::bail!("reminder does not exist [reminder_id = {}]", reminder.id);
        }

        store.1.insert(reminder.id, reminder.clone());
        Ok(reminder)
    }
}

pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        InMemoryUserDirectory {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub async fn add(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get(&self, id: UserId) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}
