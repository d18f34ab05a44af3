use crate::{DbError, Result};

use postbox_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT_SECS: u64 = 5;

/// Opens SQLite pools with the schema migrated.
pub struct Database;

impl Database {
    /// Open (or create) the database file at `path` and run migrations.
    ///
    /// Error locations name the step in this file that failed.
    pub async fn open(path: &Path) -> Result<SqlitePool> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        info!("Connecting to database: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    /// Single-connection in-memory database. Every pool gets its own schema.
    pub async fn open_in_memory() -> Result<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // In-memory needs a single connection that is never recycled
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}
