use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid identity '{value}': {message} {location}")]
    InvalidIdentity {
        value: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
