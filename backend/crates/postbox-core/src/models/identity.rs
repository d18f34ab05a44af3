use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Account identifier. Connections use a public key fingerprint; recipients
/// are whatever the sender typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wrap a fingerprint string. Surrounding whitespace is removed; the
    /// remainder must be non-empty and contain no whitespace.
    #[track_caller]
    pub fn parse(value: impl AsRef<str>) -> CoreErrorResult<Self> {
        let raw = value.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CoreError::InvalidIdentity {
                value: raw.to_string(),
                message: "identity cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidIdentity {
                value: raw.to_string(),
                message: "identity cannot contain whitespace".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Keep `value` exactly as given, rejecting only the empty string.
    ///
    /// Used for hand-typed recipients, which may name an identity that has
    /// never connected.
    #[track_caller]
    pub fn parse_verbatim(value: impl Into<String>) -> CoreErrorResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(CoreError::InvalidIdentity {
                value,
                message: "identity cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
