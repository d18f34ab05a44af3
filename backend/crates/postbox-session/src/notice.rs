/// Feedback line shown under the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error { kind: ErrorKind, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    RateLimit,
    Storage,
    Fatal,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error { message, .. } => message,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }
}
