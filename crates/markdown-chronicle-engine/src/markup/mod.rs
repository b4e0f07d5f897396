//! # Markup Transcoding
//!
//! Turns markdown source into a presentation [`Tree`] and back.
//!
//! Rendering is total: any text renders to a tree, unrecognized or
//! unterminated syntax degrades to literal text, and [`Tree::flatten`]
//! reproduces the source exactly. The tree is regenerated wholesale on
//! every change; speed comes from the document sizes this targets, not
//! from incremental reparsing.
//!
//! ## Modules
//!
//! - **`rope`**: line iteration and span plumbing over `xi_rope`
//! - **`blocks`**: two-phase block parsing (classify, then build)
//! - **`inline`**: flat inline leaf parsing within block content
//! - **`tree`**: the node model, `leaves`, and `flatten`
//! - **`html`**: the read-only display projection
//! - **`snapshot`**: test support (normalization and invariant checks)

pub mod blocks;
pub mod html;
pub mod inline;
pub mod rope;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, classify::classify, classify_lines};
use rope::lines_with_spans;

pub use html::to_html;
pub use tree::{BlockKind, BlockNode, Inline, ListMarker, TableBlock, TableRow, Tree};

/// Renders an editing buffer into a presentation tree.
#[must_use]
pub fn render(rope: &Rope) -> Tree {
    let lines: Vec<_> = lines_with_spans(rope)
        .filter(|lr| !lr.text.is_empty())
        .map(|lr| {
            let newline = if lr.newline_len() == 1 { "\n" } else { "" };
            classify(lr.without_newline(), newline)
        })
        .collect();
    BlockBuilder::new(&lines).build()
}

/// Renders borrowed source text, the test-friendly twin of [`render`].
#[must_use]
pub fn render_str(source: &str) -> Tree {
    BlockBuilder::new(&classify_lines(source)).build()
}
