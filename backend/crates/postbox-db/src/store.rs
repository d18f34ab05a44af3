use crate::{MessageRepository, Result as DbErrorResult, UserRepository};

use postbox_core::{Identity, Message, MessageId, User};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;

/// Durable storage for users and messages shared by every session.
///
/// Each call is a single statement: it either completes or returns one
/// error, and is never retried here.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert on first connection, otherwise touch `last_seen`.
    async fn upsert_user(&self, identity: &Identity) -> DbErrorResult<()>;

    async fn find_user(&self, identity: &Identity) -> DbErrorResult<Option<User>>;

    /// Messages addressed to `identity`, newest first.
    async fn list_inbox(&self, identity: &Identity) -> DbErrorResult<Vec<Message>>;

    async fn count_unread(&self, identity: &Identity) -> DbErrorResult<u64>;

    /// Append an unread message stamped with the current time.
    async fn send(&self, from: &Identity, to: &Identity, body: &str) -> DbErrorResult<MessageId>;

    /// No-op when the message is already read or does not exist.
    async fn mark_read(&self, id: MessageId) -> DbErrorResult<()>;

    /// Permanently removes the message. Returns `false` if it was already gone.
    async fn delete(&self, id: MessageId) -> DbErrorResult<bool>;
}

pub struct SqliteMessageStore {
    users: UserRepository,
    messages: MessageRepository,
}

impl SqliteMessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            messages: MessageRepository::new(pool),
        }
    }
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn upsert_user(&self, identity: &Identity) -> DbErrorResult<()> {
        self.users.upsert(identity, Utc::now()).await
    }

    async fn find_user(&self, identity: &Identity) -> DbErrorResult<Option<User>> {
        self.users.find_by_identity(identity).await
    }

    async fn list_inbox(&self, identity: &Identity) -> DbErrorResult<Vec<Message>> {
        self.messages.find_by_recipient(identity).await
    }

    async fn count_unread(&self, identity: &Identity) -> DbErrorResult<u64> {
        self.messages.count_unread(identity).await
    }

    async fn send(&self, from: &Identity, to: &Identity, body: &str) -> DbErrorResult<MessageId> {
        let id = self.messages.create(from, to, body, Utc::now()).await?;
        debug!("Stored message {} from {} to {}", id, from, to);
        Ok(id)
    }

    async fn mark_read(&self, id: MessageId) -> DbErrorResult<()> {
        self.messages.mark_read(id).await
    }

    async fn delete(&self, id: MessageId) -> DbErrorResult<bool> {
        self.messages.delete(id).await
    }
}
