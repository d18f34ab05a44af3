mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "POSTBOX_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".postbox";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "postbox.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Rate limit constraints
pub const MIN_COOLDOWN_SECS: u64 = 1;
pub const MAX_COOLDOWN_SECS: u64 = 3600;
pub const DEFAULT_COOLDOWN_SECS: u64 = 10;

// Session constraints
pub const MIN_VIEWPORT_LINES: usize = 1;
pub const MAX_VIEWPORT_LINES: usize = 100;
pub const DEFAULT_VIEWPORT_LINES: usize = 5;

pub const MIN_TICK_INTERVAL_SECS: u64 = 1;
pub const MAX_TICK_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 60;

pub const MIN_FIELD_CHARS: usize = 1;
pub const MAX_RECIPIENT_CHARS: usize = 1024;
pub const DEFAULT_MAX_RECIPIENT_CHARS: usize = 156;
pub const MAX_BODY_CHARS: usize = 65_536;
pub const DEFAULT_MAX_BODY_CHARS: usize = 1000;
