use postbox_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row in {table}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn invalid_row(table: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn from_core(table: &'static str, source: CoreError) -> Self {
        Self::invalid_row(table, source.to_string())
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
