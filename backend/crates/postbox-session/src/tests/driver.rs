use super::{FlakyStore, identity, me, session, type_text};

use crate::{ErrorKind, Event, InputAction, Notice, Screen, Session, SessionDriver};

use postbox_auth::{CooldownConfig, CooldownTracker, SendCooldown};
use postbox_core::Identity;
use postbox_db::MessageStore;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use governor::clock::FakeRelativeClock;
use googletest::prelude::*;

struct Harness {
    store: Arc<FlakyStore>,
    cooldown: Arc<CooldownTracker<FakeRelativeClock>>,
    clock: FakeRelativeClock,
    driver: SessionDriver,
}

impl Harness {
    async fn new() -> Self {
        let store = Arc::new(FlakyStore::new().await);
        let clock = FakeRelativeClock::default();
        let cooldown = Arc::new(CooldownTracker::with_clock(
            CooldownConfig { window_secs: 10 },
            clock.clone(),
        ));
        let driver = SessionDriver::new(store.clone(), cooldown.clone());
        Self {
            store,
            cooldown,
            clock,
            driver,
        }
    }

    async fn press(&self, session: Session, action: InputAction) -> Session {
        let (session, effects) = self.driver.dispatch(session, Event::Input(action)).await;
        assert!(effects.is_empty(), "unexpected outward effects {effects:?}");
        session
    }

    async fn compose(&self, session: Session, to: &str, body: &str) -> Session {
        let session = self.press(session, InputAction::Char('2')).await;
        let session = type_text(session, to);
        let session = self.press(session, InputAction::Enter).await;
        let session = type_text(session, body);
        self.press(session, InputAction::CtrlS).await
    }

    async fn seed(&self, from: &str, body: &str) -> i64 {
        self.store
            .send(&identity(from), &me(), body)
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn given_unread_messages_when_inbox_opened_then_all_marked_read_and_count_zero() {
    // Given
    let h = Harness::new().await;
    h.seed("alice", "one").await;
    h.seed("bob", "two").await;
    let session = h.press(session(), InputAction::Tick).await;
    assert_that!(session.unread_count(), eq(2));

    // When
    let session = h.press(session, InputAction::Char('1')).await;

    // Then
    let view = session.inbox().unwrap();
    assert_that!(view.messages().len(), eq(2));
    assert_that!(view.selection(), some(eq(0)));
    assert_that!(view.selected().map(|m| m.body.as_str()), some(eq("two")));
    assert_that!(session.unread_count(), eq(0));
    let stored = h.store.list_inbox(&me()).await.unwrap();
    assert!(stored.iter().all(|m| m.read));
}

#[tokio::test]
async fn given_mark_read_fails_midway_when_inbox_opened_then_partial_marks_kept_and_error_shown() {
    // Given
    let h = Harness::new().await;
    h.seed("alice", "oldest").await;
    h.seed("alice", "middle").await;
    h.seed("alice", "newest").await;
    h.store.mark_read_budget.store(1, Ordering::SeqCst);

    // When
    let session = h.press(session(), InputAction::Enter).await;

    // Then
    assert_that!(session.inbox().map(|v| v.messages().len()), some(eq(3)));
    assert_that!(
        session.notice(),
        some(eq(&Notice::Error {
            kind: ErrorKind::Storage,
            message: "failed to mark messages as read, please try again".to_string(),
        }))
    );
    assert_that!(session.unread_count(), eq(2));
    let stored = h.store.list_inbox(&me()).await.unwrap();
    assert_that!(stored.iter().filter(|m| m.read).count(), eq(1));
}

#[tokio::test]
async fn given_mark_read_and_count_both_fail_when_inbox_opened_then_mark_read_error_shown() {
    // Given
    let h = Harness::new().await;
    h.seed("alice", "one").await;
    h.seed("alice", "two").await;
    h.store.mark_read_budget.store(0, Ordering::SeqCst);
    h.store.fail_count.store(true, Ordering::SeqCst);

    // When
    let session = h.press(session(), InputAction::Enter).await;

    // Then
    assert_that!(
        session.notice().map(Notice::message),
        some(eq("failed to mark messages as read, please try again"))
    );
}

#[tokio::test]
async fn given_listing_fails_when_inbox_opened_then_stays_on_main_menu() {
    // Given
    let h = Harness::new().await;
    h.store.fail_list.store(true, Ordering::SeqCst);

    // When
    let session = h.press(session(), InputAction::Enter).await;

    // Then
    assert_that!(session.screen(), eq(&Screen::MainMenu));
    assert_that!(
        session.notice().map(Notice::message),
        some(eq("failed to load messages, please try again"))
    );
}

#[tokio::test]
async fn given_valid_draft_when_sent_then_recipient_inbox_gains_unread_message() {
    // Given
    let h = Harness::new().await;
    let bob = identity("bob");

    // When
    let session = h.compose(session(), "bob", "hello\nbob").await;

    // Then
    assert_that!(session.screen(), eq(&Screen::MainMenu));
    assert_that!(
        session.notice(),
        some(eq(&Notice::success("Message sent successfully!")))
    );
    let inbox = h.store.list_inbox(&bob).await.unwrap();
    assert_that!(inbox.len(), eq(1));
    assert_that!(inbox[0].from_identity, eq(&me()));
    assert_that!(inbox[0].body.as_str(), eq("hello\nbob"));
    assert_that!(inbox[0].read, eq(false));
    assert_that!(h.cooldown.can_send(me().as_str()), eq(false));
}

#[tokio::test]
async fn given_recipient_with_spaces_when_sent_then_stored_under_typed_name() {
    // Given
    let h = Harness::new().await;
    let recipient = Identity::parse_verbatim("bob smith").unwrap();

    // When
    let session = h.compose(session(), "bob smith", "hi").await;

    // Then
    assert_that!(session.notice(), some(eq(&Notice::success("Message sent successfully!"))));
    let stored = h.store.list_inbox(&recipient).await.unwrap();
    assert_that!(stored.len(), eq(1));
    assert_that!(stored[0].to_identity, eq(&recipient));
}

#[tokio::test]
async fn given_recent_send_when_sending_again_then_rate_limited_and_no_row_added() {
    // Given
    let h = Harness::new().await;
    let bob = identity("bob");
    let session = h.compose(session(), "bob", "first").await;
    h.clock.advance(Duration::from_secs(3));

    // When
    let session = h.compose(session, "bob", "second").await;

    // Then
    assert_that!(
        session.screen(),
        eq(&Screen::ComposeContent {
            recipient: bob.clone(),
            body: "second".to_string(),
        })
    );
    assert_that!(
        session.notice(),
        some(eq(&Notice::Error {
            kind: ErrorKind::RateLimit,
            message: "rate limit: please wait 10 seconds between messages (7s left)".to_string(),
        }))
    );
    assert_that!(h.store.list_inbox(&bob).await.unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_cooldown_elapsed_when_resubmitting_draft_then_sent() {
    // Given
    let h = Harness::new().await;
    let session = h.compose(session(), "bob", "first").await;
    let session = h.compose(session, "bob", "second").await;

    // When
    h.clock.advance(Duration::from_secs(10));
    let session = h.press(session, InputAction::CtrlS).await;

    // Then
    assert_that!(session.screen(), eq(&Screen::MainMenu));
    assert_that!(h.store.list_inbox(&identity("bob")).await.unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_store_failure_when_sending_then_draft_preserved_and_no_cooldown_recorded() {
    // Given
    let h = Harness::new().await;
    h.store.fail_send.store(true, Ordering::SeqCst);

    // When
    let session = h.compose(session(), "bob", "keep me").await;

    // Then
    assert_that!(
        session.screen(),
        eq(&Screen::ComposeContent {
            recipient: identity("bob"),
            body: "keep me".to_string(),
        })
    );
    assert_that!(
        session.notice().and_then(Notice::error_kind),
        some(eq(ErrorKind::Storage))
    );
    assert_that!(h.cooldown.can_send(me().as_str()), eq(true));
    assert_that!(h.cooldown.tracked_identities(), eq(0));
}

#[tokio::test]
async fn given_selected_message_when_deleted_then_removed_from_store_and_view() {
    // Given
    let h = Harness::new().await;
    h.seed("alice", "keep").await;
    let doomed = h.seed("alice", "remove").await;
    let session = h.press(session(), InputAction::Enter).await;

    // When
    let session = h.press(session, InputAction::Char('d')).await;

    // Then
    let view = session.inbox().unwrap();
    assert_that!(view.messages().len(), eq(1));
    assert_that!(view.selected().map(|m| m.body.as_str()), some(eq("keep")));
    assert_that!(session.notice(), some(eq(&Notice::success("Message deleted"))));
    let stored = h.store.list_inbox(&me()).await.unwrap();
    assert!(stored.iter().all(|m| m.id != doomed));
}

#[tokio::test]
async fn given_delete_fails_when_deleting_then_view_unchanged() {
    // Given
    let h = Harness::new().await;
    h.seed("alice", "stays").await;
    let session = h.press(session(), InputAction::Enter).await;
    let before = session.inbox().unwrap().clone();
    h.store.fail_delete.store(true, Ordering::SeqCst);

    // When
    let session = h.press(session, InputAction::Char('d')).await;

    // Then
    assert_that!(session.inbox(), some(eq(&before)));
    assert_that!(
        session.notice().map(Notice::message),
        some(eq("failed to delete message, please try again"))
    );
}

#[tokio::test]
async fn given_message_deleted_elsewhere_when_deleting_then_treated_as_success() {
    // Given
    let h = Harness::new().await;
    let id = h.seed("alice", "gone soon").await;
    let session = h.press(session(), InputAction::Enter).await;
    h.store.delete(id).await.unwrap();

    // When
    let session = h.press(session, InputAction::Char('d')).await;

    // Then
    assert!(session.inbox().unwrap().is_empty());
    assert_that!(session.notice(), some(eq(&Notice::success("Message deleted"))));
}

#[tokio::test]
async fn given_count_fails_when_ticking_then_notice_and_screen_kept() {
    // Given
    let h = Harness::new().await;
    h.store.fail_count.store(true, Ordering::SeqCst);

    // When
    let session = h.press(session(), InputAction::Tick).await;

    // Then
    assert_that!(session.screen(), eq(&Screen::MainMenu));
    assert_that!(
        session.notice().map(Notice::message),
        some(eq("failed to refresh unread count, please try again"))
    );
}

#[tokio::test]
async fn given_two_sessions_of_same_identity_when_both_send_then_second_rate_limited() {
    // Given
    let h = Harness::new().await;
    let first = session();
    let second = session();

    // When
    let first = h.compose(first, "bob", "from tab one").await;
    let second = h.compose(second, "carol", "from tab two").await;

    // Then
    assert_that!(first.screen(), eq(&Screen::MainMenu));
    assert_that!(
        second.notice().and_then(Notice::error_kind),
        some(eq(ErrorKind::RateLimit))
    );
    assert!(h.store.list_inbox(&identity("carol")).await.unwrap().is_empty());
}
