pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity::Identity;
pub use models::message::{Message, MessageId};
pub use models::user::User;

#[cfg(test)]
mod tests;
