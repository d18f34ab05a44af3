pub mod app_state;
pub mod cli;
pub mod console;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app_state::AppState;
pub use cli::Cli;
pub use console::{PlainRenderer, parse_line};
pub use error::{Result, ServerError};
pub use logger::LogSink;
