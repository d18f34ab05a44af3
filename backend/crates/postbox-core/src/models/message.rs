use crate::Identity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned, strictly increasing message id.
pub type MessageId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub from_identity: Identity,
    pub to_identity: Identity,

    /// Free text, may span several lines.
    pub body: String,

    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
