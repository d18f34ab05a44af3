use postbox_core::{CoreError, ErrorLocation};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No public key presented {location}")]
    MissingPublicKey { location: ErrorLocation },

    #[error("Invalid public key: {message} {location}")]
    InvalidPublicKey {
        message: String,
        location: ErrorLocation,
    },

    #[error("Public key is not valid base64: {source} {location}")]
    KeyDecode {
        #[source]
        source: base64::DecodeError,
        location: ErrorLocation,
    },

    #[error("Fingerprint rejected: {source} {location}")]
    Identity {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
