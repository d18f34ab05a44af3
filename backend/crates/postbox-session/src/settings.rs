/// Per-session limits, taken from `[session]` in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub viewport_lines: usize,
    pub max_recipient_chars: usize,
    pub max_body_chars: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            viewport_lines: 5,
            max_recipient_chars: 156,
            max_body_chars: 1000,
        }
    }
}
