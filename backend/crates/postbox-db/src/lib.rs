pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::message_repository::MessageRepository;
pub use repositories::user_repository::UserRepository;
pub use store::{MessageStore, SqliteMessageStore};
