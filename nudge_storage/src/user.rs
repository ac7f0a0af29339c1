use async_trait::async_trait;

use nudge_models::user::{User, UserId};

/// Profile lookup used when a reminder is created, to backfill recipients
/// the caller left out.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get(&self, id: UserId) -> anyhow::Result<Option<User>>;
}
