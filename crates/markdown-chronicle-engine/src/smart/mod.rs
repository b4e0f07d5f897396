//! # Smart Conversions
//!
//! Keystroke-time transformations that run synchronously inside the input
//! handling turn, before the next render.
//!
//! - **`trigger`**: patterns matched against the line up to the caret when
//!   a trigger character (space) lands, e.g. `# ` starting a heading or
//!   `** ` pre-positioning the caret inside an empty strong span.
//! - **`continuation`**: Enter-key handling inside lists and quotes, which
//!   carries the marker onto the next line or clears a marker-only line.
//!
//! All offsets are character offsets, matching the caret locator.

pub mod continuation;
pub mod trigger;

pub use continuation::{Continuation, on_enter};
pub use trigger::{Conversion, check};

/// Whether a space landing at `caret` completes any trigger pattern.
#[must_use]
pub fn converts(text: &str, caret: usize) -> bool {
    trigger::check(text, caret).is_some()
}

/// Byte offset of a character offset, clamped to the end of the text.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

/// The byte range start of the line containing `byte_caret` and the line
/// content from there up to the caret.
fn line_up_to(text: &str, byte_caret: usize) -> (usize, &str) {
    let head = &text[..byte_caret];
    let line_start = head.rfind('\n').map_or(0, |i| i + 1);
    (line_start, &head[line_start..])
}
