use crate::Session;

use std::io;

/// Draws session state for one connection.
///
/// Pull-based: the runner calls `render` after every processed event.
pub trait Renderer: Send {
    fn render(&mut self, session: &Session) -> io::Result<()>;

    /// Put `text` on the client's clipboard, if the terminal supports it.
    fn set_clipboard(&mut self, text: &str) -> io::Result<()>;
}
