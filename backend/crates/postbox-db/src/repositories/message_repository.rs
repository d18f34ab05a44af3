use crate::{DbError, Result as DbErrorResult};

use postbox_core::{Identity, Message, MessageId};

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const TABLE: &str = "messages";

#[derive(FromRow)]
struct MessageRow {
    id: i64,
    from_identity: String,
    to_identity: String,
    body: String,
    created_at: i64,
    read: bool,
}

impl TryFrom<MessageRow> for Message {
    type Error = DbError;

    fn try_from(row: MessageRow) -> DbErrorResult<Self> {
        let created_at = DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| {
            DbError::invalid_row(
                TABLE,
                format!("created_at out of range: {}", row.created_at),
            )
        })?;

        Ok(Message {
            id: row.id,
            from_identity: Identity::parse_verbatim(row.from_identity)
                .map_err(|e| DbError::from_core(TABLE, e))?,
            to_identity: Identity::parse_verbatim(row.to_identity)
                .map_err(|e| DbError::from_core(TABLE, e))?,
            body: row.body,
            created_at,
            read: row.read,
        })
    }
}

pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an unread message and return its id.
    pub async fn create(
        &self,
        from: &Identity,
        to: &Identity,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> DbErrorResult<MessageId> {
        let result = sqlx::query(
            r#"
              INSERT INTO messages (from_identity, to_identity, body, created_at, read)
              VALUES (?, ?, ?, ?, 0)
              "#,
        )
        .bind(from.as_str())
        .bind(to.as_str())
        .bind(body)
        .bind(created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: MessageId) -> DbErrorResult<Option<Message>> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
              SELECT id, from_identity, to_identity, body, created_at, read
              FROM messages
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Message::try_from).transpose()
    }

    /// Newest first; equal timestamps fall back to the higher id.
    pub async fn find_by_recipient(&self, to: &Identity) -> DbErrorResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
              SELECT id, from_identity, to_identity, body, created_at, read
              FROM messages
              WHERE to_identity = ?
              ORDER BY created_at DESC, id DESC
              "#,
        )
        .bind(to.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Message::try_from).collect()
    }

    pub async fn count_unread(&self, to: &Identity) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
              SELECT COUNT(*)
              FROM messages
              WHERE to_identity = ? AND read = 0
              "#,
        )
        .bind(to.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }

    pub async fn mark_read(&self, id: MessageId) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE messages
              SET read = 1
              WHERE id = ? AND read = 0
              "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns `false` when no row had that id.
    pub async fn delete(&self, id: MessageId) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              DELETE FROM messages
              WHERE id = ?
              "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
