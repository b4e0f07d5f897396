//! Enter-key continuation inside lists and quotes.

use crate::markup::blocks::kinds::{BlockQuote, ListItem};

use super::{byte_offset, line_up_to};

/// The rewritten text and caret after an Enter press was intercepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation {
    pub text: String,
    pub caret: usize,
}

/// Handles Enter inside a list item or quote line.
///
/// A line with a marker and content continues on the next line with the
/// same marker (ordered markers increment, checklists restart unchecked).
/// A marker-only line means the user pressed Enter to leave the list: a
/// plain newline goes in and the construct stops. Returns `None` on
/// ordinary lines so the caller inserts a plain newline itself.
#[must_use]
pub fn on_enter(text: &str, caret: usize) -> Option<Continuation> {
    let byte_caret = byte_offset(text, caret);
    let (_, line) = line_up_to(text, byte_caret);

    let (marker, content) = split_marker(line)?;

    if content.is_empty() {
        let mut stopped = String::with_capacity(text.len() + 1);
        stopped.push_str(&text[..byte_caret]);
        stopped.push('\n');
        stopped.push_str(&text[byte_caret..]);
        return Some(Continuation {
            text: stopped,
            caret: caret + 1,
        });
    }

    let mut continued = String::with_capacity(text.len() + 1 + marker.len());
    continued.push_str(&text[..byte_caret]);
    continued.push('\n');
    continued.push_str(&marker);
    continued.push_str(&text[byte_caret..]);

    Some(Continuation {
        caret: caret + 1 + marker.chars().count(),
        text: continued,
    })
}

/// Splits a line into the marker to carry forward and the content after
/// the current marker.
fn split_marker(line: &str) -> Option<(String, &str)> {
    if let Some((_, content)) = ListItem::try_task(line) {
        return Some((ListItem::task_marker(false).to_string(), content));
    }
    if let Some(content) = ListItem::try_bullet(line) {
        return Some((ListItem::BULLET.to_string(), content));
    }
    if let Some((number, _, content)) = ListItem::try_ordered(line) {
        return Some((format!("{}. ", number + 1), content));
    }
    if let Some(content) = BlockQuote::try_open(line) {
        return Some((BlockQuote::PREFIX.to_string(), content));
    }
    if line == BlockQuote::PREFIX {
        return Some((BlockQuote::PREFIX.to_string(), ""));
    }
    None
}
