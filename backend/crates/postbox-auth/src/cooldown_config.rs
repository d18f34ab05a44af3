use std::time::Duration;

pub const DEFAULT_COOLDOWN_SECS: u64 = 10;

/// Minimum spacing between two sends by the same identity.
#[derive(Debug, Clone)]
pub struct CooldownConfig {
    pub window_secs: u64,
}

impl CooldownConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_COOLDOWN_SECS,
        }
    }
}
