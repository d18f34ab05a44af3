use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, RateLimitConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for POSTBOX_CONFIG_DIR env var, else use ./.postbox/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply POSTBOX_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: POSTBOX_CONFIG_DIR env var > ./.postbox/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.rate_limit.validate()?;
        self.session.validate()?;

        // Database must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if self.database.path.is_empty() || db_path.is_absolute() || self.database.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// None when logging to stderr.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!("  rate_limit: cooldown={}s", self.rate_limit.cooldown_secs);
        info!(
            "  session: viewport={} lines, tick={}s, recipient<={} chars, body<={} chars",
            self.session.viewport_lines,
            self.session.tick_interval_secs,
            self.session.max_recipient_chars,
            self.session.max_body_chars
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("POSTBOX_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("POSTBOX_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("POSTBOX_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("POSTBOX_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("POSTBOX_LOG_DIR", &mut self.logging.dir);

        // Rate limit
        Self::apply_env_parse(
            "POSTBOX_RATE_LIMIT_COOLDOWN_SECS",
            &mut self.rate_limit.cooldown_secs,
        );

        // Session
        Self::apply_env_parse(
            "POSTBOX_SESSION_VIEWPORT_LINES",
            &mut self.session.viewport_lines,
        );
        Self::apply_env_parse(
            "POSTBOX_SESSION_TICK_INTERVAL_SECS",
            &mut self.session.tick_interval_secs,
        );
        Self::apply_env_parse(
            "POSTBOX_SESSION_MAX_RECIPIENT_CHARS",
            &mut self.session.max_recipient_chars,
        );
        Self::apply_env_parse(
            "POSTBOX_SESSION_MAX_BODY_CHARS",
            &mut self.session.max_body_chars,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
