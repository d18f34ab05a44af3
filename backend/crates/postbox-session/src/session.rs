use crate::{InboxView, MenuItem, Notice, SessionSettings, Theme};

use postbox_core::Identity;

/// Terminal size reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
}

/// Current screen, carrying only the state that screen needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    ViewMessages(InboxView),
    ComposeRecipient { recipient: String },
    ComposeContent { recipient: Identity, body: String },
}

/// Everything a renderer needs to draw one connection.
///
/// Owned by a single connection. Changes only through `transition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) identity: Identity,
    pub(crate) screen: Screen,
    pub(crate) menu_selection: MenuItem,
    pub(crate) theme: Theme,
    pub(crate) unread_count: u64,
    pub(crate) notice: Option<Notice>,
    pub(crate) geometry: Geometry,
    pub(crate) settings: SessionSettings,
}

impl Session {
    pub fn new(identity: Identity, geometry: Geometry, settings: SessionSettings) -> Self {
        Self {
            identity,
            screen: Screen::MainMenu,
            menu_selection: MenuItem::default(),
            theme: Theme::default(),
            unread_count: 0,
            notice: None,
            geometry,
            settings,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn menu_selection(&self) -> MenuItem {
        self.menu_selection
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn unread_count(&self) -> u64 {
        self.unread_count
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn inbox(&self) -> Option<&InboxView> {
        match &self.screen {
            Screen::ViewMessages(view) => Some(view),
            _ => None,
        }
    }
}
