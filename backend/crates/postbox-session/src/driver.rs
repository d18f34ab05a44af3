use crate::{Effect, Event, Outcome, Request, Session, SessionError};

use postbox_auth::SendCooldown;
use postbox_core::{Identity, MessageId};
use postbox_db::MessageStore;

use std::collections::VecDeque;
use std::sync::Arc;

/// Runs requests against the shared store and cooldown on behalf of one
/// session, feeding each outcome back into the transition.
#[derive(Clone)]
pub struct SessionDriver {
    store: Arc<dyn MessageStore>,
    cooldown: Arc<dyn SendCooldown>,
}

impl SessionDriver {
    pub fn new(store: Arc<dyn MessageStore>, cooldown: Arc<dyn SendCooldown>) -> Self {
        Self { store, cooldown }
    }

    /// Apply `event` and settle every request it triggers.
    ///
    /// Only transport effects are returned, in the order they were produced.
    pub async fn dispatch(&self, session: Session, event: Event) -> (Session, Vec<Effect>) {
        let mut session = session;
        let mut pending = VecDeque::from([event]);
        let mut outward = Vec::new();

        while let Some(event) = pending.pop_front() {
            let (next, effects) = session.transition(event);
            session = next;

            for effect in effects {
                match effect {
                    Effect::Request(request) => {
                        let outcome = self.execute(session.identity(), request).await;
                        pending.push_back(Event::Outcome(outcome));
                    }
                    other => outward.push(other),
                }
            }
        }

        (session, outward)
    }

    pub async fn execute(&self, identity: &Identity, request: Request) -> Outcome {
        match request {
            Request::OpenInbox => self.open_inbox(identity).await,
            Request::SendMessage { to, body } => self.send(identity, &to, &body).await,
            Request::DeleteMessage { id } => self.delete(identity, id).await,
            Request::RefreshUnreadCount => match self.store.count_unread(identity).await {
                Ok(count) => Outcome::UnreadCounted(count),
                Err(e) => {
                    log::warn!("Failed to count unread messages for {}: {}", identity, e);
                    Outcome::UnreadCountFailed(SessionError::storage("refresh unread count", e))
                }
            },
        }
    }

    async fn open_inbox(&self, identity: &Identity) -> Outcome {
        let messages = match self.store.list_inbox(identity).await {
            Ok(messages) => messages,
            Err(e) => {
                log::warn!("Failed to list inbox for {}: {}", identity, e);
                return Outcome::InboxFailed(SessionError::storage("load messages", e));
            }
        };

        let mut mark_failure = None;
        for message in messages.iter().filter(|m| m.is_unread()) {
            if let Err(e) = self.store.mark_read(message.id).await {
                log::warn!("Failed to mark message {} read: {}", message.id, e);
                mark_failure = Some(SessionError::storage("mark messages as read", e));
                break;
            }
        }

        log::debug!("Opened inbox for {} with {} messages", identity, messages.len());

        Outcome::InboxOpened {
            messages,
            mark_failure,
        }
    }

    async fn send(&self, from: &Identity, to: &Identity, body: &str) -> Outcome {
        // Not atomic with record_send below; see SendCooldown
        if !self.cooldown.can_send(from.as_str()) {
            let remaining = self.cooldown.remaining(from.as_str());
            log::info!("Send from {} rejected by cooldown", from);
            return Outcome::SendRejected(SessionError::rate_limited(
                self.cooldown.window(),
                remaining,
            ));
        }

        match self.store.send(from, to, body).await {
            Ok(id) => {
                self.cooldown.record_send(from.as_str());
                log::info!("Message {} sent from {} to {}", id, from, to);
                Outcome::MessageSent { id }
            }
            Err(e) => {
                log::warn!("Failed to store message from {}: {}", from, e);
                Outcome::SendRejected(SessionError::storage("send message", e))
            }
        }
    }

    async fn delete(&self, identity: &Identity, id: MessageId) -> Outcome {
        match self.store.delete(id).await {
            Ok(existed) => {
                if !existed {
                    log::debug!("Message {} was already gone", id);
                }
                log::info!("Message {} deleted by {}", id, identity);
                Outcome::MessageDeleted { id }
            }
            Err(e) => {
                log::warn!("Failed to delete message {}: {}", id, e);
                Outcome::DeleteFailed {
                    id,
                    error: SessionError::storage("delete message", e),
                }
            }
        }
    }
}
