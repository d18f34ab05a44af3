use crate::pagination::Direction;
use crate::{
    Effect, Event, InboxView, InputAction, MenuItem, Notice, Outcome, Request, Screen, Session,
    SessionError,
};

use postbox_core::{CoreError, Identity};

const COPIED_NOTICE: &str = "SSH key fingerprint copied to clipboard!";
const SENT_NOTICE: &str = "Message sent successfully!";
const DELETED_NOTICE: &str = "Message deleted";

impl Session {
    /// Apply one event and return the next state with the effects it asks for.
    ///
    /// No I/O happens here. Requests are executed by `SessionDriver`, which
    /// feeds their outcomes back through this same function.
    pub fn transition(mut self, event: Event) -> (Session, Vec<Effect>) {
        let effects = match event {
            Event::Input(action) => self.on_input(action),
            Event::Outcome(outcome) => self.on_outcome(outcome),
        };
        (self, effects)
    }

    fn on_input(&mut self, action: InputAction) -> Vec<Effect> {
        match action {
            InputAction::Quit => return vec![Effect::Quit],
            InputAction::Tick => return vec![Effect::Request(Request::RefreshUnreadCount)],
            InputAction::Resize { width, height } => {
                self.geometry.width = width;
                self.geometry.height = height;
                return Vec::new();
            }
            _ => {}
        }

        match self.screen {
            Screen::MainMenu => self.on_main_menu(action),
            Screen::ViewMessages(_) => self.on_view_messages(action),
            Screen::ComposeRecipient { .. } => self.on_compose_recipient(action),
            Screen::ComposeContent { .. } => self.on_compose_content(action),
        }
    }

    fn on_main_menu(&mut self, action: InputAction) -> Vec<Effect> {
        match action {
            InputAction::Up | InputAction::Char('k') => {
                self.menu_selection = self.menu_selection.previous();
                Vec::new()
            }
            InputAction::Down | InputAction::Char('j') => {
                self.menu_selection = self.menu_selection.next();
                Vec::new()
            }
            InputAction::Enter | InputAction::Char(' ') => self.execute_menu_item(),
            InputAction::Char('q') => vec![Effect::Quit],
            InputAction::Char('c') => {
                self.notice = Some(Notice::success(COPIED_NOTICE));
                vec![Effect::CopyToClipboard(self.identity.to_string())]
            }
            InputAction::Char(c) => match MenuItem::from_shortcut(c) {
                Some(item) => {
                    self.menu_selection = item;
                    self.execute_menu_item()
                }
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn execute_menu_item(&mut self) -> Vec<Effect> {
        match self.menu_selection {
            // The screen changes once the inbox outcome arrives
            MenuItem::ViewMessages => vec![Effect::Request(Request::OpenInbox)],
            MenuItem::Compose => {
                self.notice = None;
                self.screen = Screen::ComposeRecipient {
                    recipient: String::new(),
                };
                Vec::new()
            }
            MenuItem::ChangeTheme => {
                self.theme = self.theme.toggled();
                self.notice = Some(Notice::success(format!(
                    "Theme changed to {}",
                    self.theme.name()
                )));
                Vec::new()
            }
            MenuItem::Quit => vec![Effect::Quit],
        }
    }

    fn on_view_messages(&mut self, action: InputAction) -> Vec<Effect> {
        let viewport = self.settings.viewport_lines;
        let Screen::ViewMessages(view) = &mut self.screen else {
            return Vec::new();
        };

        match action {
            InputAction::Escape | InputAction::Char('q') => {
                self.screen = Screen::MainMenu;
                self.notice = None;
                Vec::new()
            }
            InputAction::Down | InputAction::Char('j') => {
                view.navigate(Direction::Down, viewport);
                Vec::new()
            }
            InputAction::Up | InputAction::Char('k') => {
                view.navigate(Direction::Up, viewport);
                Vec::new()
            }
            InputAction::Char('d') => match view.selected() {
                Some(message) => vec![Effect::Request(Request::DeleteMessage { id: message.id })],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn on_compose_recipient(&mut self, action: InputAction) -> Vec<Effect> {
        let max_chars = self.settings.max_recipient_chars;
        let Screen::ComposeRecipient { recipient } = &mut self.screen else {
            return Vec::new();
        };

        match action {
            InputAction::Char(c) => push_bounded(recipient, c, max_chars),
            InputAction::Backspace => {
                recipient.pop();
            }
            InputAction::Escape => self.cancel_compose(),
            InputAction::Enter => match parse_recipient(recipient) {
                Ok(recipient) => {
                    self.notice = None;
                    self.screen = Screen::ComposeContent {
                        recipient,
                        body: String::new(),
                    };
                }
                Err(error) => self.notice = Some(error.to_notice()),
            },
            _ => {}
        }

        Vec::new()
    }

    fn on_compose_content(&mut self, action: InputAction) -> Vec<Effect> {
        let max_chars = self.settings.max_body_chars;
        let Screen::ComposeContent { recipient, body } = &mut self.screen else {
            return Vec::new();
        };

        match action {
            InputAction::Char(c) => push_bounded(body, c, max_chars),
            InputAction::Enter => push_bounded(body, '\n', max_chars),
            InputAction::Backspace => {
                body.pop();
            }
            InputAction::Escape => self.cancel_compose(),
            InputAction::CtrlS => {
                if body.is_empty() {
                    let error = SessionError::validation("message cannot be empty");
                    self.notice = Some(error.to_notice());
                } else {
                    // Draft stays in place until the send outcome arrives
                    return vec![Effect::Request(Request::SendMessage {
                        to: recipient.clone(),
                        body: body.clone(),
                    })];
                }
            }
            _ => {}
        }

        Vec::new()
    }

    fn cancel_compose(&mut self) {
        self.screen = Screen::MainMenu;
        self.notice = None;
    }

    fn on_outcome(&mut self, outcome: Outcome) -> Vec<Effect> {
        match outcome {
            Outcome::InboxOpened {
                messages,
                mark_failure,
            } => {
                self.screen = Screen::ViewMessages(InboxView::new(messages));
                self.notice = mark_failure.map(|error| error.to_notice());
                // Messages were just marked read
                return vec![Effect::Request(Request::RefreshUnreadCount)];
            }
            Outcome::InboxFailed(error) => self.notice = Some(error.to_notice()),
            Outcome::MessageSent { .. } => {
                if let Screen::ComposeContent { .. } = self.screen {
                    self.screen = Screen::MainMenu;
                }
                self.notice = Some(Notice::success(SENT_NOTICE));
            }
            Outcome::SendRejected(error) => self.notice = Some(error.to_notice()),
            Outcome::MessageDeleted { id } => {
                if let Screen::ViewMessages(view) = &mut self.screen {
                    view.remove(id);
                }
                self.notice = Some(Notice::success(DELETED_NOTICE));
            }
            Outcome::DeleteFailed { error, .. } => self.notice = Some(error.to_notice()),
            Outcome::UnreadCounted(count) => self.unread_count = count,
            Outcome::UnreadCountFailed(error) => {
                // An earlier error from the same dispatch stays visible
                if self.notice.as_ref().and_then(Notice::error_kind).is_none() {
                    self.notice = Some(error.to_notice());
                }
            }
        }

        Vec::new()
    }
}

fn push_bounded(field: &mut String, c: char, max_chars: usize) {
    if field.chars().count() < max_chars {
        field.push(c);
    }
}

/// Anything typed is accepted verbatim; only an empty draft is refused.
#[track_caller]
fn parse_recipient(raw: &str) -> Result<Identity, SessionError> {
    if raw.is_empty() {
        return Err(SessionError::validation("recipient cannot be empty"));
    }

    Identity::parse_verbatim(raw)
        .map_err(|CoreError::InvalidIdentity { message, .. }| SessionError::validation(message))
}
