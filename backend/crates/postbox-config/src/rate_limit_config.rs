use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOLDOWN_SECS, MAX_COOLDOWN_SECS, MIN_COOLDOWN_SECS,
};

use serde::Deserialize;

/// Send cooldown shared by all sessions of an identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Minimum seconds between two sends by the same identity
    pub cooldown_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cooldown_secs < MIN_COOLDOWN_SECS || self.cooldown_secs > MAX_COOLDOWN_SECS {
            return Err(ConfigError::config(format!(
                "rate_limit.cooldown_secs must be {}-{}, got {}",
                MIN_COOLDOWN_SECS, MAX_COOLDOWN_SECS, self.cooldown_secs
            )));
        }

        Ok(())
    }
}
