use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_BODY_CHARS, DEFAULT_MAX_RECIPIENT_CHARS,
    DEFAULT_TICK_INTERVAL_SECS, DEFAULT_VIEWPORT_LINES, MAX_BODY_CHARS, MAX_RECIPIENT_CHARS,
    MAX_TICK_INTERVAL_SECS, MAX_VIEWPORT_LINES, MIN_FIELD_CHARS, MIN_TICK_INTERVAL_SECS,
    MIN_VIEWPORT_LINES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Message lines visible at once in the inbox view
    pub viewport_lines: usize,
    /// Unread count refresh period
    pub tick_interval_secs: u64,
    pub max_recipient_chars: usize,
    pub max_body_chars: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            viewport_lines: DEFAULT_VIEWPORT_LINES,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            max_recipient_chars: DEFAULT_MAX_RECIPIENT_CHARS,
            max_body_chars: DEFAULT_MAX_BODY_CHARS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "session.viewport_lines",
            self.viewport_lines as u64,
            MIN_VIEWPORT_LINES as u64,
            MAX_VIEWPORT_LINES as u64,
        )?;
        check_range(
            "session.tick_interval_secs",
            self.tick_interval_secs,
            MIN_TICK_INTERVAL_SECS,
            MAX_TICK_INTERVAL_SECS,
        )?;
        check_range(
            "session.max_recipient_chars",
            self.max_recipient_chars as u64,
            MIN_FIELD_CHARS as u64,
            MAX_RECIPIENT_CHARS as u64,
        )?;
        check_range(
            "session.max_body_chars",
            self.max_body_chars as u64,
            MIN_FIELD_CHARS as u64,
            MAX_BODY_CHARS as u64,
        )
    }
}

#[track_caller]
fn check_range(name: &str, value: u64, min: u64, max: u64) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::config(format!(
            "{} must be {}-{}, got {}",
            name, min, max, value
        )));
    }
    Ok(())
}
