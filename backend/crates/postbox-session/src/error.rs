use crate::{ErrorKind, Notice};

use postbox_auth::AuthError;
use postbox_db::DbError;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Send rate limited: {retry_after_secs}s left of {window_secs}s {location}")]
    RateLimited {
        window_secs: u64,
        retry_after_secs: u64,
        location: ErrorLocation,
    },

    #[error("Storage error while trying to {operation}: {source} {location}")]
    Storage {
        operation: &'static str,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Connection rejected, no usable identity: {reason} {location}")]
    Identity {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Renderer failed: {source} {location}")]
    Render {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Remaining time is rounded up to whole seconds.
    #[track_caller]
    pub fn rate_limited(window: Duration, remaining: Duration) -> Self {
        let mut retry_after_secs = remaining.as_secs();
        if remaining.subsec_nanos() > 0 {
            retry_after_secs += 1;
        }

        Self::RateLimited {
            window_secs: window.as_secs(),
            retry_after_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(operation: &'static str, source: DbError) -> Self {
        Self::Storage {
            operation,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity(reason: impl Into<String>) -> Self {
        Self::Identity {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn render(source: std::io::Error) -> Self {
        Self::Render {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RateLimited { .. } => ErrorKind::RateLimit,
            Self::Storage { .. } => ErrorKind::Storage,
            Self::Identity { .. } | Self::Render { .. } => ErrorKind::Fatal,
        }
    }

    /// Inline text for the user, without source locations.
    pub fn to_notice(&self) -> Notice {
        let message = match self {
            Self::Validation { message, .. } => message.clone(),
            Self::RateLimited {
                window_secs,
                retry_after_secs,
                ..
            } => format!(
                "rate limit: please wait {} seconds between messages ({}s left)",
                window_secs, retry_after_secs
            ),
            Self::Storage { operation, .. } => format!("failed to {operation}, please try again"),
            Self::Identity { reason, .. } => format!("connection rejected: {reason}"),
            Self::Render { .. } => "display error".to_string(),
        };

        Notice::Error {
            kind: self.kind(),
            message,
        }
    }
}

impl From<AuthError> for SessionError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::identity(source.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
