use crate::console::{PlainRenderer, parse_line};

use postbox_core::Identity;
use postbox_session::{Event, Geometry, InputAction, Renderer, Session, SessionSettings};

use googletest::prelude::*;

fn session() -> Session {
    Session::new(
        Identity::parse("me-fingerprint").unwrap(),
        Geometry {
            width: 80,
            height: 24,
        },
        SessionSettings::default(),
    )
}

fn rendered(session: &Session) -> String {
    let mut renderer = PlainRenderer::new(Vec::new());
    renderer.render(session).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn given_plain_text_when_parsed_then_one_char_per_action() {
    assert_eq!(
        parse_line("hi!"),
        vec![
            InputAction::Char('h'),
            InputAction::Char('i'),
            InputAction::Char('!'),
        ]
    );
}

#[test]
fn given_empty_line_when_parsed_then_enter() {
    assert_eq!(parse_line(""), vec![InputAction::Enter]);
    assert_eq!(parse_line("\r\n"), vec![InputAction::Enter]);
}

#[test]
fn given_named_keys_when_parsed_then_actions() {
    assert_eq!(parse_line(":up"), vec![InputAction::Up]);
    assert_eq!(parse_line(":esc"), vec![InputAction::Escape]);
    assert_eq!(parse_line(":bs"), vec![InputAction::Backspace]);
    assert_eq!(parse_line(":send"), vec![InputAction::CtrlS]);
    assert_eq!(parse_line(":quit"), vec![InputAction::Quit]);
    assert_eq!(
        parse_line(":size 120x40"),
        vec![InputAction::Resize {
            width: 120,
            height: 40
        }]
    );
}

#[test]
fn given_unknown_colon_line_when_parsed_then_typed_as_text() {
    assert_eq!(
        parse_line(":)"),
        vec![InputAction::Char(':'), InputAction::Char(')')]
    );
}

#[test]
fn given_main_menu_when_rendered_then_identity_and_highlighted_item_shown() {
    // When
    let frame = rendered(&session());

    // Then
    assert_that!(frame.as_str(), contains_substring("you: me-fingerprint"));
    assert_that!(frame.as_str(), contains_substring("> 1. View messages"));
    assert_that!(frame.as_str(), contains_substring("unread: 0"));
}

#[test]
fn given_error_notice_when_rendered_then_error_line_shown() {
    // Given
    let session = session().transition(Event::Input(InputAction::Char('2'))).0;
    let session = session.transition(Event::Input(InputAction::Enter)).0;

    // When
    let frame = rendered(&session);

    // Then
    assert_that!(frame.as_str(), contains_substring("error: recipient cannot be empty"));
}

#[test]
fn given_clipboard_text_when_copied_then_osc52_sequence_written() {
    // Given
    let mut renderer = PlainRenderer::new(Vec::new());

    // When
    renderer.set_clipboard("abc").unwrap();

    // Then
    let out = String::from_utf8(renderer.into_inner()).unwrap();
    assert_that!(out.as_str(), eq("\x1b]52;c;YWJj\x07"));
}
