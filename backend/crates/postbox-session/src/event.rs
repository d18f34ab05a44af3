use crate::{InputAction, SessionError};

use postbox_core::{Message, MessageId};

#[derive(Debug)]
pub enum Event {
    Input(InputAction),
    Outcome(Outcome),
}

/// Result of an executed `Request`.
#[derive(Debug)]
pub enum Outcome {
    /// The inbox was listed. Marking stops at the first failure, which is
    /// reported here; messages marked before it stay read.
    InboxOpened {
        messages: Vec<Message>,
        mark_failure: Option<SessionError>,
    },
    InboxFailed(SessionError),
    MessageSent { id: MessageId },
    /// Rate limited or not stored. Nothing was recorded against the cooldown.
    SendRejected(SessionError),
    MessageDeleted { id: MessageId },
    DeleteFailed { id: MessageId, error: SessionError },
    UnreadCounted(u64),
    UnreadCountFailed(SessionError),
}

impl From<InputAction> for Event {
    fn from(action: InputAction) -> Self {
        Event::Input(action)
    }
}

impl From<Outcome> for Event {
    fn from(outcome: Outcome) -> Self {
        Event::Outcome(outcome)
    }
}
