/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    ViewMessages,
    Compose,
    ChangeTheme,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::ViewMessages,
        MenuItem::Compose,
        MenuItem::ChangeTheme,
        MenuItem::Quit,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::ViewMessages => 0,
            Self::Compose => 1,
            Self::ChangeTheme => 2,
            Self::Quit => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Digit shortcuts `1`-`3`. Quit has no digit.
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::ViewMessages),
            '2' => Some(Self::Compose),
            '3' => Some(Self::ChangeTheme),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ViewMessages => "View messages",
            Self::Compose => "Send a message",
            Self::ChangeTheme => "Change theme",
            Self::Quit => "Quit",
        }
    }
}

/// Display theme. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Gruvbox,
    Dracula,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Gruvbox => Self::Dracula,
            Self::Dracula => Self::Gruvbox,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gruvbox => "Gruvbox",
            Self::Dracula => "Dracula",
        }
    }
}
