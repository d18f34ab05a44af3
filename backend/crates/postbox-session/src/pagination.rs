//! Scrolling through the selected message and moving between messages.
//!
//! A message is shown through a viewport of `V` lines. Down first reveals the
//! remaining lines of the current message one at a time and only then moves
//! to the next message. Up mirrors this: it scrolls back to the top, then
//! moves to the previous message and lands on that message's last page.
//! Selection wraps in both directions.
//!
//! Everything here is pure; no state is kept between calls.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Result of one navigation step inside the selected message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    /// Stay on the message, with this new offset.
    Scroll(usize),
    /// Select the next message, offset reset to 0.
    AdvanceSelection,
    /// Select the previous message, offset at its tail.
    RetreatSelection,
}

/// Selected message index and first visible line within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub selection: usize,
    pub scroll_offset: usize,
}

/// Lines of a message body. An empty body is a single empty line.
pub fn line_count(body: &str) -> usize {
    body.split('\n').count()
}

pub fn step(line_count: usize, viewport: usize, offset: usize, direction: Direction) -> ScrollStep {
    match direction {
        Direction::Down => {
            if line_count > viewport && offset + viewport < line_count {
                ScrollStep::Scroll(offset + 1)
            } else {
                ScrollStep::AdvanceSelection
            }
        }
        Direction::Up => {
            if offset > 0 {
                ScrollStep::Scroll(offset - 1)
            } else {
                ScrollStep::RetreatSelection
            }
        }
    }
}

/// Offset that shows the last page of a message.
pub fn tail_offset(line_count: usize, viewport: usize) -> usize {
    line_count.saturating_sub(viewport)
}

/// Apply one step to `cursor` over an inbox of `len` messages.
///
/// `line_count_of(i)` gives the line count of message `i`. An empty inbox
/// leaves the cursor untouched.
pub fn navigate<F>(
    cursor: Cursor,
    len: usize,
    line_count_of: F,
    viewport: usize,
    direction: Direction,
) -> Cursor
where
    F: Fn(usize) -> usize,
{
    if len == 0 {
        return cursor;
    }

    let current = cursor.selection.min(len - 1);

    match step(line_count_of(current), viewport, cursor.scroll_offset, direction) {
        ScrollStep::Scroll(scroll_offset) => Cursor {
            selection: current,
            scroll_offset,
        },
        ScrollStep::AdvanceSelection => Cursor {
            selection: (current + 1) % len,
            scroll_offset: 0,
        },
        ScrollStep::RetreatSelection => {
            let selection = (current + len - 1) % len;
            Cursor {
                selection,
                scroll_offset: tail_offset(line_count_of(selection), viewport),
            }
        }
    }
}

/// Lines of `body` inside the viewport starting at `offset`.
pub fn visible_lines(body: &str, offset: usize, viewport: usize) -> impl Iterator<Item = &str> {
    body.split('\n').skip(offset).take(viewport)
}

/// Inbox entries listed around the selection, at most `max_visible` of them.
///
/// The first entry selected shows the head of the list, the last shows its
/// tail, anything else starts one entry above the selection.
pub fn visible_window(selection: usize, len: usize, max_visible: usize) -> Range<usize> {
    if len == 0 {
        return 0..0;
    }

    if selection == 0 {
        0..max_visible.min(len)
    } else if selection >= len - 1 {
        len.saturating_sub(max_visible)..len
    } else {
        let start = selection - 1;
        start..(start + max_visible).min(len)
    }
}
