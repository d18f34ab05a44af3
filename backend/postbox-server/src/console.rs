//! Line-oriented console transport.
//!
//! Each stdin line becomes one or more input actions. Plain text is typed
//! character by character, an empty line is Enter, and a line starting with
//! `:` names a key (`:up`, `:down`, `:esc`, `:bs`, `:send`, `:quit`, ...).
//! Unknown `:` lines are typed as text.

use postbox_session::{InputAction, MenuItem, Notice, Screen, Session};

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Inbox entries listed around the selection.
const LIST_WINDOW: usize = 3;

pub const HELP: &str = "keys: text types, empty line = enter, :up :down :left :right :esc :bs :send :quit :size WxH";

pub fn parse_line(line: &str) -> Vec<InputAction> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return vec![InputAction::Enter];
    }

    if let Some(action) = line.strip_prefix(':').and_then(named_action) {
        return vec![action];
    }

    line.chars().map(InputAction::Char).collect()
}

fn named_action(name: &str) -> Option<InputAction> {
    let action = match name.trim() {
        "up" => InputAction::Up,
        "down" => InputAction::Down,
        "left" => InputAction::Left,
        "right" => InputAction::Right,
        "enter" => InputAction::Enter,
        "esc" => InputAction::Escape,
        "bs" => InputAction::Backspace,
        "send" => InputAction::CtrlS,
        "quit" => InputAction::Quit,
        other => return parse_resize(other),
    };
    Some(action)
}

fn parse_resize(command: &str) -> Option<InputAction> {
    let size = command.strip_prefix("size")?.trim();
    let (width, height) = size.split_once('x')?;
    Some(InputAction::Resize {
        width: width.trim().parse().ok()?,
        height: height.trim().parse().ok()?,
    })
}

/// Writes each frame as plain text.
pub struct PlainRenderer<W> {
    out: W,
}

impl<W: Write + Send> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "== postbox == [{}] unread: {}",
            session.theme().name(),
            session.unread_count()
        )?;
        writeln!(self.out, "you: {}", session.identity())
    }

    fn main_menu(&mut self, session: &Session) -> io::Result<()> {
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let marker = if *item == session.menu_selection() { ">" } else { " " };
            if i < 3 {
                writeln!(self.out, "  {} {}. {}", marker, i + 1, item.label())?;
            } else {
                writeln!(self.out, "  {}    {}", marker, item.label())?;
            }
        }
        writeln!(self.out, "  (c copies your fingerprint, q quits)")
    }

    fn inbox(&mut self, session: &Session) -> io::Result<()> {
        let Some(view) = session.inbox() else {
            return Ok(());
        };

        if view.is_empty() {
            return writeln!(self.out, "  inbox is empty (esc to go back)");
        }

        let viewport = session.settings().viewport_lines;
        writeln!(self.out, "  inbox: {} messages", view.messages().len())?;

        for index in view.window(LIST_WINDOW) {
            let message = &view.messages()[index];
            let marker = if view.selection() == Some(index) { ">" } else { " " };
            let status = if message.read { " " } else { "*" };
            writeln!(
                self.out,
                "  {}{} from {} at {}",
                marker,
                status,
                message.from_identity,
                message.created_at.format("%Y-%m-%d %H:%M")
            )?;
        }

        writeln!(self.out, "  ---")?;
        if view.scroll_offset() > 0 {
            writeln!(self.out, "  ^ more")?;
        }
        for line in view.visible_lines(viewport) {
            writeln!(self.out, "  | {}", line)?;
        }
        let shown_to = view.scroll_offset() + viewport;
        if let Some(selected) = view.selected()
            && shown_to < postbox_session::pagination::line_count(&selected.body)
        {
            writeln!(self.out, "  v more")?;
        }
        writeln!(self.out, "  (up/down to scroll, d deletes, esc goes back)")
    }

    fn notice(&mut self, notice: &Notice) -> io::Result<()> {
        match notice {
            Notice::Success(message) => writeln!(self.out, "  ok: {}", message),
            Notice::Error { message, .. } => writeln!(self.out, "  error: {}", message),
        }
    }
}

impl<W: Write + Send> postbox_session::Renderer for PlainRenderer<W> {
    fn render(&mut self, session: &Session) -> io::Result<()> {
        self.header(session)?;

        match session.screen() {
            Screen::MainMenu => self.main_menu(session)?,
            Screen::ViewMessages(_) => self.inbox(session)?,
            Screen::ComposeRecipient { recipient } => {
                writeln!(self.out, "  to: {}_", recipient)?;
                writeln!(self.out, "  (enter to continue, esc cancels)")?;
            }
            Screen::ComposeContent { recipient, body } => {
                writeln!(self.out, "  to: {}", recipient)?;
                for line in body.split('\n') {
                    writeln!(self.out, "  | {}", line)?;
                }
                writeln!(self.out, "  (:send to send, esc cancels)")?;
            }
        }

        if let Some(notice) = session.notice() {
            self.notice(notice)?;
        }

        self.out.flush()
    }

    /// OSC 52 escape, understood by most terminal emulators.
    fn set_clipboard(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.out.flush()
    }
}
