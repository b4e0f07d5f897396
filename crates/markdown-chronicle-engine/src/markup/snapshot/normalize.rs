use std::collections::BTreeMap;

use serde::Serialize;

use crate::markup::tree::{BlockKind, BlockNode, Inline, ListMarker, Tree};

/// Snapshot of a rendered document for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    /// Blank lines before the first block, verbatim.
    pub leading: String,
    /// All blocks in document order.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block for testing.
#[derive(Serialize)]
pub struct BlockSnap {
    /// Block kind as a string (e.g., "Heading(2)", "CodeBlock(rust)").
    pub kind: String,
    /// Preview of the block's flattened text (truncated for readability).
    pub text: String,
    /// The newline run following the block, verbatim.
    pub terminator: String,
    /// Inline leaves within this block, empty for raw blocks.
    pub inline: Vec<InlineSnap>,
}

/// Snapshot of a single inline leaf for testing.
#[derive(Serialize)]
pub struct InlineSnap {
    /// Leaf kind as a string (e.g., "Text", "Strong", "Link").
    pub kind: String,
    /// The leaf's inner text.
    pub text: String,
    /// Named sub-parts (e.g., "url" for links and images).
    pub parts: BTreeMap<String, String>,
}

/// Converts a rendered tree into a serializable snapshot for testing.
pub fn normalize(tree: &Tree) -> Snap {
    Snap {
        leading: tree.leading.clone(),
        blocks: tree.blocks.iter().map(block_snap).collect(),
    }
}

fn block_snap(block: &BlockNode) -> BlockSnap {
    let kind = match &block.kind {
        BlockKind::Heading { level, .. } => format!("Heading({level})"),
        BlockKind::Paragraph { .. } => "Paragraph".to_string(),
        BlockKind::CodeBlock { language, .. } => format!("CodeBlock({language})"),
        BlockKind::Diagram { keyword, .. } => format!("Diagram({keyword})"),
        BlockKind::MathBlock { .. } => "MathBlock".to_string(),
        BlockKind::Table(table) => {
            format!("Table({}x{})", table.header.cells.len(), table.rows.len())
        }
        BlockKind::ListItem { marker, .. } => match marker {
            ListMarker::Bullet => "ListItem(Bullet)".to_string(),
            ListMarker::Ordered { number, .. } => format!("ListItem(Ordered({number}))"),
            ListMarker::Task { checked: true } => "ListItem(Task(done))".to_string(),
            ListMarker::Task { checked: false } => "ListItem(Task(open))".to_string(),
        },
        BlockKind::Quote { .. } => "Quote".to_string(),
        BlockKind::Rule => "Rule".to_string(),
    };

    let inline = match &block.kind {
        BlockKind::Heading { children, .. }
        | BlockKind::Paragraph { children }
        | BlockKind::ListItem { children, .. }
        | BlockKind::Quote { children } => children.iter().map(inline_snap).collect(),
        _ => vec![],
    };

    BlockSnap {
        kind,
        text: clip(&block_text(block), 80),
        terminator: block.terminator.clone(),
        inline,
    }
}

fn inline_snap(node: &Inline) -> InlineSnap {
    let mut parts = BTreeMap::new();
    let (kind, text) = match node {
        Inline::Text(s) => ("Text", s.clone()),
        Inline::LineBreak => ("LineBreak", String::new()),
        Inline::Strong(s) => ("Strong", s.clone()),
        Inline::Emphasis(s) => ("Emphasis", s.clone()),
        Inline::Strike(s) => ("Strike", s.clone()),
        Inline::Highlight(s) => ("Highlight", s.clone()),
        Inline::Code(s) => ("Code", s.clone()),
        Inline::Link { text, url } => {
            parts.insert("url".to_string(), url.clone());
            ("Link", text.clone())
        }
        Inline::Image { alt, url } => {
            parts.insert("url".to_string(), url.clone());
            ("Image", alt.clone())
        }
        Inline::Footnote { label } => ("Footnote", label.clone()),
    };

    InlineSnap {
        kind: kind.to_string(),
        text: clip(&text, 60),
        parts,
    }
}

/// Flattened text of one block, without its terminator.
fn block_text(block: &BlockNode) -> String {
    Tree {
        leading: String::new(),
        blocks: vec![BlockNode {
            kind: block.kind.clone(),
            terminator: String::new(),
        }],
    }
    .flatten()
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render_str;

    #[test]
    fn block_kinds_label_their_parameters() {
        let snap = normalize(&render_str("## two\n007. bond\n```rust\nx\n```\n"));
        let kinds: Vec<&str> = snap.blocks.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(kinds, ["Heading(2)", "ListItem(Ordered(7))", "CodeBlock(rust)"]);
    }

    #[test]
    fn link_url_lands_in_parts() {
        let snap = normalize(&render_str("[t](u)\n"));
        let inline = &snap.blocks[0].inline[0];
        assert_eq!(inline.kind, "Link");
        assert_eq!(inline.parts.get("url"), Some(&"u".to_string()));
    }

    #[test]
    fn raw_blocks_have_no_inline_leaves() {
        let snap = normalize(&render_str("```\n**not bold**\n```\n"));
        assert!(snap.blocks[0].inline.is_empty());
    }
}
