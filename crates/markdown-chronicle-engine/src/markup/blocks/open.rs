use super::kinds::{BlockQuote, Heading, ListItem, ThematicBreak};

/// A single-line block opener and its marker-stripped content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Heading { level: u8, content: &'a str },
    Rule,
    Task { checked: bool, content: &'a str },
    Bullet { content: &'a str },
    Ordered { number: u64, marker: &'a str, content: &'a str },
    Quote { content: &'a str },
}

/// Probes the single-line openers in precedence order.
///
/// Checklist markers run before plain bullets because they share the `- `
/// prefix. Fences and tables are multi-line and handled by the builder.
pub fn try_open_leaf(line: &str) -> Option<BlockOpen<'_>> {
    if let Some((level, content)) = Heading::try_open(line) {
        return Some(BlockOpen::Heading { level, content });
    }
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::Rule);
    }
    if let Some((checked, content)) = ListItem::try_task(line) {
        return Some(BlockOpen::Task { checked, content });
    }
    if let Some(content) = ListItem::try_bullet(line) {
        return Some(BlockOpen::Bullet { content });
    }
    if let Some((number, marker, content)) = ListItem::try_ordered(line) {
        return Some(BlockOpen::Ordered {
            number,
            marker,
            content,
        });
    }
    if let Some(content) = BlockQuote::try_open(line) {
        return Some(BlockOpen::Quote { content });
    }
    None
}
