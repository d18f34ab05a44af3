pub mod cooldown_config;
pub mod cooldown_tracker;
pub mod error;
pub mod fingerprint;
pub mod send_cooldown;

pub use cooldown_config::CooldownConfig;
pub use cooldown_tracker::CooldownTracker;
pub use error::{AuthError, Result};
pub use fingerprint::{fingerprint_from_authorized_key, fingerprint_from_key_blob};
pub use send_cooldown::SendCooldown;
