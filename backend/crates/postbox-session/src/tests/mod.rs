mod driver;

use crate::{Geometry, InputAction, Session, SessionSettings};

use postbox_core::{ErrorLocation, Identity, Message, MessageId, User};
use postbox_db::{Database, DbError, MessageStore, Result as DbErrorResult, SqliteMessageStore};

use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::DateTime;

pub(crate) fn identity(value: &str) -> Identity {
    Identity::parse(value).unwrap()
}

pub(crate) fn me() -> Identity {
    identity("me-fingerprint")
}

pub(crate) fn message(id: MessageId, body: &str) -> Message {
    Message {
        id,
        from_identity: identity("sender"),
        to_identity: me(),
        body: body.to_string(),
        created_at: DateTime::from_timestamp(1_760_000_000 + id, 0).unwrap(),
        read: false,
    }
}

/// Body with `lines` numbered lines.
pub(crate) fn lines(lines: usize) -> String {
    (1..=lines)
        .map(|n| format!("line {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn session() -> Session {
    Session::new(
        me(),
        Geometry {
            width: 80,
            height: 24,
        },
        SessionSettings::default(),
    )
}

pub(crate) fn type_text(session: Session, text: &str) -> Session {
    text.chars().fold(session, |session, c| {
        session.transition(InputAction::Char(c).into()).0
    })
}

fn injected(operation: &str) -> DbError {
    DbError::Initialization {
        message: format!("injected {operation} failure"),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Real SQLite store whose operations can be made to fail on demand.
pub(crate) struct FlakyStore {
    pub inner: SqliteMessageStore,
    pub fail_upsert: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_send: AtomicBool,
    pub fail_delete: AtomicBool,
    pub fail_count: AtomicBool,
    /// Number of `mark_read` calls that succeed before every later one fails.
    pub mark_read_budget: AtomicUsize,
}

impl FlakyStore {
    pub async fn new() -> Self {
        let pool = Database::open_in_memory().await.unwrap();
        Self {
            inner: SqliteMessageStore::new(pool),
            fail_upsert: AtomicBool::new(false),
            fail_list: AtomicBool::new(false),
            fail_send: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            fail_count: AtomicBool::new(false),
            mark_read_budget: AtomicUsize::new(usize::MAX),
        }
    }
}

#[async_trait]
impl MessageStore for FlakyStore {
    async fn upsert_user(&self, identity: &Identity) -> DbErrorResult<()> {
        if self.fail_upsert.load(Ordering::SeqCst) {
            return Err(injected("upsert"));
        }
        self.inner.upsert_user(identity).await
    }

    async fn find_user(&self, identity: &Identity) -> DbErrorResult<Option<User>> {
        self.inner.find_user(identity).await
    }

    async fn list_inbox(&self, identity: &Identity) -> DbErrorResult<Vec<Message>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(injected("list"));
        }
        self.inner.list_inbox(identity).await
    }

    async fn count_unread(&self, identity: &Identity) -> DbErrorResult<u64> {
        if self.fail_count.load(Ordering::SeqCst) {
            return Err(injected("count"));
        }
        self.inner.count_unread(identity).await
    }

    async fn send(&self, from: &Identity, to: &Identity, body: &str) -> DbErrorResult<MessageId> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(injected("send"));
        }
        self.inner.send(from, to, body).await
    }

    async fn mark_read(&self, id: MessageId) -> DbErrorResult<()> {
        let allowed = self
            .mark_read_budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !allowed {
            return Err(injected("mark read"));
        }
        self.inner.mark_read(id).await
    }

    async fn delete(&self, id: MessageId) -> DbErrorResult<bool> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(injected("delete"));
        }
        self.inner.delete(id).await
    }
}
