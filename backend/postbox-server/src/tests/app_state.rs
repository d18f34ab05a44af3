use crate::AppState;

use postbox_config::Config;
use postbox_core::Identity;
use postbox_db::Database;
use postbox_session::{Geometry, InputAction, Screen};

use std::time::Duration;

use googletest::prelude::*;

#[tokio::test]
async fn given_config_when_state_built_then_session_limits_and_tick_follow_it() {
    // Given
    let mut config = Config::default();
    config.session.max_recipient_chars = 2;
    config.session.tick_interval_secs = 15;
    let pool = Database::open_in_memory().await.unwrap();

    // When
    let state = AppState::from_pool(pool, &config);
    let session = state
        .gateway
        .open(
            Some(Identity::parse("me").unwrap()),
            Geometry {
                width: 80,
                height: 24,
            },
        )
        .await
        .unwrap();

    // Then
    assert_that!(state.tick_interval, eq(Duration::from_secs(15)));
    let session = "2abc".chars().fold(session, |s, c| {
        s.transition(InputAction::Char(c).into()).0
    });
    assert_that!(
        session.screen(),
        eq(&Screen::ComposeRecipient {
            recipient: "ab".to_string()
        })
    );
}

#[tokio::test]
async fn given_missing_identity_when_opening_then_rejected() {
    // Given
    let pool = Database::open_in_memory().await.unwrap();
    let state = AppState::from_pool(pool, &Config::default());

    // When
    let result = state.gateway.open(None, Geometry::default()).await;

    // Then
    assert!(result.is_err());
}
