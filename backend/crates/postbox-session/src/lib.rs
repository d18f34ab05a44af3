pub mod driver;
pub mod effect;
pub mod error;
pub mod event;
pub mod gateway;
pub mod inbox_view;
pub mod input;
pub mod menu;
pub mod notice;
pub mod pagination;
pub mod renderer;
pub mod runner;
pub mod session;
pub mod settings;
pub mod ticker;
mod transition;

pub use driver::SessionDriver;
pub use effect::{Effect, Request};
pub use error::{Result, SessionError};
pub use event::{Event, Outcome};
pub use gateway::Gateway;
pub use inbox_view::InboxView;
pub use input::InputAction;
pub use menu::{MenuItem, Theme};
pub use notice::{ErrorKind, Notice};
pub use pagination::{Cursor, Direction, ScrollStep};
pub use renderer::Renderer;
pub use runner::SessionRunner;
pub use session::{Geometry, Screen, Session};
pub use settings::SessionSettings;
pub use ticker::{IntervalTicker, Ticker};

#[cfg(test)]
mod tests;
