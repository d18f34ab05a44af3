use crate::{DbError, Result as DbErrorResult};

use postbox_core::{Identity, User};

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const TABLE: &str = "users";

#[derive(FromRow)]
struct UserRow {
    fingerprint: String,
    first_seen: i64,
    last_seen: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            identity: Identity::parse(&row.fingerprint).map_err(|e| DbError::from_core(TABLE, e))?,
            first_seen: timestamp(row.first_seen)?,
            last_seen: timestamp(row.last_seen)?,
        })
    }
}

fn timestamp(secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::invalid_row(TABLE, format!("timestamp out of range: {secs}")))
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the user on first sight, otherwise only move `last_seen`.
    pub async fn upsert(&self, identity: &Identity, seen_at: DateTime<Utc>) -> DbErrorResult<()> {
        let seen_at = seen_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO users (fingerprint, first_seen, last_seen)
              VALUES (?, ?, ?)
              ON CONFLICT(fingerprint) DO UPDATE SET last_seen = excluded.last_seen
              "#,
        )
        .bind(identity.as_str())
        .bind(seen_at)
        .bind(seen_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_identity(&self, identity: &Identity) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT fingerprint, first_seen, last_seen
              FROM users
              WHERE fingerprint = ?
              "#,
        )
        .bind(identity.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}
