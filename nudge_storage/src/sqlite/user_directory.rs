use async_trait::async_trait;
use sqlx::SqlitePool;

use nudge_models::user::{User, UserId};

use crate::user::UserDirectory;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    phone: Option<String>,
    timezone: String,
}

impl TryFrom<UserRow> for User {
    type Error = anyhow::Error;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            email: value.email,
            phone: value.phone,
            timezone: value
                .timezone
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid timezone [value = {}]: {e}", value.timezone))?,
        })
    }
}

pub struct SqliteUserDirectory {
    pool: SqlitePool,
}

impl SqliteUserDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for SqliteUserDirectory {
    async fn get(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, phone, timezone FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
