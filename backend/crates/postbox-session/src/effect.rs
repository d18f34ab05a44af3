use postbox_core::{Identity, MessageId};

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Executed by the driver; its outcome is fed back as an event.
    Request(Request),
    /// Handed to the transport: put text on the client's clipboard.
    CopyToClipboard(String),
    /// Handed to the transport: close the connection.
    Quit,
}

/// Work against the shared store and send cooldown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// List the inbox, then mark its unread messages read.
    OpenInbox,
    /// Check the cooldown, store the message, record the send.
    SendMessage { to: Identity, body: String },
    DeleteMessage { id: MessageId },
    RefreshUnreadCount,
}
