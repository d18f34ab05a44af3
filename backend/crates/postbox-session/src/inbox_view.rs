use crate::pagination::{self, Cursor, Direction};

use postbox_core::{Message, MessageId};

use std::ops::Range;

/// Inbox snapshot loaded when entering the messages screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxView {
    messages: Vec<Message>,
    selection: Option<usize>,
    scroll_offset: usize,
}

impl InboxView {
    pub fn new(messages: Vec<Message>) -> Self {
        let selection = if messages.is_empty() { None } else { Some(0) };
        Self {
            messages,
            selection,
            scroll_offset: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// None only when the snapshot is empty.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected(&self) -> Option<&Message> {
        self.selection.and_then(|i| self.messages.get(i))
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn navigate(&mut self, direction: Direction, viewport: usize) {
        let Some(selection) = self.selection else {
            return;
        };

        let cursor = pagination::navigate(
            Cursor {
                selection,
                scroll_offset: self.scroll_offset,
            },
            self.messages.len(),
            |i| pagination::line_count(&self.messages[i].body),
            viewport,
            direction,
        );

        self.selection = Some(cursor.selection);
        self.scroll_offset = cursor.scroll_offset;
    }

    /// Drop a deleted message, keeping the selection index where possible.
    pub fn remove(&mut self, id: MessageId) -> bool {
        let Some(position) = self.messages.iter().position(|m| m.id == id) else {
            return false;
        };

        self.messages.remove(position);
        self.scroll_offset = 0;
        self.selection = match (self.selection, self.messages.len()) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => Some(0),
        };

        true
    }

    /// Lines of the selected message inside the viewport.
    pub fn visible_lines(&self, viewport: usize) -> Vec<&str> {
        self.selected()
            .map(|m| pagination::visible_lines(&m.body, self.scroll_offset, viewport).collect())
            .unwrap_or_default()
    }

    /// Whether the selected message is longer than the viewport.
    pub fn selected_overflows(&self, viewport: usize) -> bool {
        self.selected()
            .is_some_and(|m| pagination::line_count(&m.body) > viewport)
    }

    pub fn window(&self, max_visible: usize) -> Range<usize> {
        pagination::visible_window(
            self.selection.unwrap_or(0),
            self.messages.len(),
            max_visible,
        )
    }
}
