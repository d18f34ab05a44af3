use crate::error::Result as ServerErrorResult;

use postbox_auth::{CooldownConfig, CooldownTracker};
use postbox_config::Config;
use postbox_db::{Database, SqliteMessageStore};
use postbox_session::{Gateway, SessionSettings};

use std::sync::Arc;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;

/// Process-wide resources shared by every connection.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
    pub tick_interval: Duration,
}

impl AppState {
    /// Open the configured database and build the shared gateway.
    pub async fn build(config: &Config) -> ServerErrorResult<Self> {
        let database_path = config.database_path()?;
        let pool = Database::open(&database_path).await?;
        info!("Database ready at {}", database_path.display());

        Ok(Self::from_pool(pool, config))
    }

    pub fn from_pool(pool: SqlitePool, config: &Config) -> Self {
        let store = Arc::new(SqliteMessageStore::new(pool));
        let cooldown = Arc::new(CooldownTracker::new(CooldownConfig {
            window_secs: config.rate_limit.cooldown_secs,
        }));

        let settings = SessionSettings {
            viewport_lines: config.session.viewport_lines,
            max_recipient_chars: config.session.max_recipient_chars,
            max_body_chars: config.session.max_body_chars,
        };

        Self {
            gateway: Gateway::new(store, cooldown, settings),
            tick_interval: Duration::from_secs(config.session.tick_interval_secs),
        }
    }
}
