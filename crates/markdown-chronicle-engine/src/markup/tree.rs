//! The presentation tree: the structured form of a rendered document.
//!
//! Every character of the source survives in the tree, either as marker
//! knowledge (heading level, list marker, delimiter kind) or as literal
//! text, so [`Tree::flatten`] reproduces the source exactly. The caret
//! locator and flatten share one projection: [`Tree::leaves`], the
//! document-order sequence of text pieces covering the whole source.
//!
//! The tree is regenerated wholesale on every text change and never mutated
//! in place.

use super::blocks::kinds;
use super::inline::kinds as inline_kinds;

/// A rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    /// Blank lines before the first block, kept verbatim.
    pub leading: String,
    pub blocks: Vec<BlockNode>,
}

/// One block plus the exact newline run that follows it in source.
///
/// The terminator is empty only at end of input; a single `\n` separates
/// adjacent constructs, longer runs carry the blank lines between blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    pub terminator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading {
        level: u8,
        children: Vec<Inline>,
    },
    Paragraph {
        children: Vec<Inline>,
    },
    /// Verbatim fenced code; `body` holds the inner lines without newlines.
    CodeBlock {
        language: String,
        body: Vec<String>,
    },
    /// A fenced block whose language is a reserved keyword; shown as a
    /// labeled frame, never interpreted.
    Diagram {
        keyword: &'static str,
        body: Vec<String>,
    },
    /// Display math between lone `$$` lines, verbatim.
    MathBlock {
        body: Vec<String>,
    },
    Table(TableBlock),
    ListItem {
        marker: ListMarker,
        children: Vec<Inline>,
    },
    Quote {
        children: Vec<Inline>,
    },
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    /// `raw` keeps the source marker text (`"007. "`) so flattening is
    /// exact even with leading zeros.
    Ordered {
        number: u64,
        raw: String,
    },
    Task {
        checked: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub header: TableRow,
    /// The divider line between header and body, verbatim.
    pub divider: String,
    pub rows: Vec<TableRow>,
}

/// One table row: the raw source line for flattening, the trimmed cells
/// (inline-parsed) for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub raw: String,
    pub cells: Vec<Vec<Inline>>,
}

/// Flat, non-overlapping inline leaves. Delimiters are implied by the
/// variant and re-emitted on flatten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// A single newline inside a paragraph.
    LineBreak,
    Strong(String),
    Emphasis(String),
    Strike(String),
    Highlight(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
    Footnote { label: String },
}

impl Tree {
    /// The document-order sequence of text pieces covering the entire
    /// source. Concatenating them is [`Tree::flatten`]; the caret locator
    /// walks the same sequence so its offsets agree with source offsets.
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        push_piece(&mut out, &self.leading);
        for block in &self.blocks {
            push_block(&mut out, &block.kind);
            push_piece(&mut out, &block.terminator);
        }
        out
    }

    /// Serializes the tree back to the exact source text it was rendered
    /// from.
    #[must_use]
    pub fn flatten(&self) -> String {
        self.leaves().concat()
    }
}

fn push_piece<'t>(out: &mut Vec<&'t str>, s: &'t str) {
    if !s.is_empty() {
        out.push(s);
    }
}

fn push_block<'t>(out: &mut Vec<&'t str>, kind: &'t BlockKind) {
    match kind {
        BlockKind::Heading { level, children } => {
            out.push(kinds::Heading::marker(*level));
            out.push(" ");
            push_inlines(out, children);
        }
        BlockKind::Paragraph { children } => push_inlines(out, children),
        BlockKind::CodeBlock { language, body } => push_fenced(out, language, body),
        BlockKind::Diagram { keyword, body } => push_fenced(out, keyword, body),
        BlockKind::MathBlock { body } => {
            out.push(kinds::MathBlock::DELIM);
            for line in body {
                out.push("\n");
                push_piece(out, line);
            }
            out.push("\n");
            out.push(kinds::MathBlock::DELIM);
        }
        BlockKind::Table(table) => {
            push_piece(out, &table.header.raw);
            out.push("\n");
            push_piece(out, &table.divider);
            for row in &table.rows {
                out.push("\n");
                push_piece(out, &row.raw);
            }
        }
        BlockKind::ListItem { marker, children } => {
            match marker {
                ListMarker::Bullet => out.push(kinds::ListItem::BULLET),
                ListMarker::Ordered { raw, .. } => out.push(raw),
                ListMarker::Task { checked } => out.push(kinds::ListItem::task_marker(*checked)),
            }
            push_inlines(out, children);
        }
        BlockKind::Quote { children } => {
            out.push(kinds::BlockQuote::PREFIX);
            push_inlines(out, children);
        }
        BlockKind::Rule => out.push(kinds::ThematicBreak::LINE),
    }
}

fn push_fenced<'t>(out: &mut Vec<&'t str>, language: &'t str, body: &'t [String]) {
    out.push(kinds::CodeFence::FENCE);
    push_piece(out, language);
    for line in body {
        out.push("\n");
        push_piece(out, line);
    }
    out.push("\n");
    out.push(kinds::CodeFence::FENCE);
}

fn push_inlines<'t>(out: &mut Vec<&'t str>, children: &'t [Inline]) {
    for inline in children {
        match inline {
            Inline::Text(s) => push_piece(out, s),
            Inline::LineBreak => out.push("\n"),
            Inline::Strong(s) => push_wrapped(out, inline_kinds::Strong::DELIM, s),
            Inline::Emphasis(s) => push_wrapped(out, inline_kinds::Emphasis::DELIM, s),
            Inline::Strike(s) => push_wrapped(out, inline_kinds::Strike::DELIM, s),
            Inline::Highlight(s) => push_wrapped(out, inline_kinds::Highlight::DELIM, s),
            Inline::Code(s) => push_wrapped(out, inline_kinds::CodeSpan::TICK, s),
            Inline::Link { text, url } => {
                out.push(inline_kinds::Link::OPEN);
                push_piece(out, text);
                out.push(inline_kinds::Link::MID);
                push_piece(out, url);
                out.push(inline_kinds::Link::END);
            }
            Inline::Image { alt, url } => {
                out.push(inline_kinds::Image::OPEN);
                push_piece(out, alt);
                out.push(inline_kinds::Link::MID);
                push_piece(out, url);
                out.push(inline_kinds::Link::END);
            }
            Inline::Footnote { label } => {
                out.push(inline_kinds::Footnote::OPEN);
                push_piece(out, label);
                out.push(inline_kinds::Footnote::CLOSE);
            }
        }
    }
}

fn push_wrapped<'t>(out: &mut Vec<&'t str>, delim: &'static str, s: &'t str) {
    out.push(delim);
    push_piece(out, s);
    out.push(delim);
}
