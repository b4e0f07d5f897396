use crate::markup::inline::parse_inline;
use crate::markup::tree::{BlockKind, BlockNode, Inline, ListMarker, TableBlock, TableRow, Tree};

use super::{
    classify::LineClass,
    fences::{FenceKind, FencePair, pair_fences},
    kinds::Table,
    open::{BlockOpen, try_open_leaf},
};

/// Phase 2 of block parsing: walks classified lines and assembles the
/// document tree.
///
/// The walk jumps over paired fence bodies as raw zones, looks one line
/// ahead for table dividers, and accumulates consecutive plain lines into
/// paragraphs. Blank lines and every trailing newline are routed into the
/// preceding block's terminator (or the tree's leading run), which is what
/// makes flattening reproduce the source byte for byte.
pub struct BlockBuilder<'a> {
    lines: &'a [LineClass],
    pairs: Vec<Option<FencePair>>,
    leading: String,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(lines: &'a [LineClass]) -> Self {
        Self {
            lines,
            pairs: pair_fences(lines),
            leading: String::new(),
            out: vec![],
        }
    }

    pub fn build(mut self) -> Tree {
        let mut i = 0;
        while i < self.lines.len() {
            let lc = &self.lines[i];

            if lc.is_blank {
                let target = self.terminator_target();
                target.push_str(&lc.text);
                target.push_str(&lc.newline);
                i += 1;
                continue;
            }

            if let Some(pair) = self.pairs[i].clone() {
                i = self.consume_fence(i, pair);
                continue;
            }

            if self.table_starts_at(i) {
                i = self.consume_table(i);
                continue;
            }

            if let Some(open) = try_open_leaf(&lc.text) {
                self.push_single(&open, &lc.newline);
                i += 1;
                continue;
            }

            i = self.consume_paragraph(i);
        }

        Tree {
            leading: self.leading,
            blocks: self.out,
        }
    }

    /// Where blank lines and block newlines accumulate.
    fn terminator_target(&mut self) -> &mut String {
        match self.out.last_mut() {
            Some(last) => &mut last.terminator,
            None => &mut self.leading,
        }
    }

    fn table_starts_at(&self, i: usize) -> bool {
        Table::is_row(&self.lines[i].text)
            && self
                .lines
                .get(i + 1)
                .is_some_and(|next| Table::is_divider(&next.text))
    }

    fn consume_fence(&mut self, open: usize, pair: FencePair) -> usize {
        let body: Vec<String> = self.lines[open + 1..pair.close]
            .iter()
            .map(|l| l.text.clone())
            .collect();

        let kind = match pair.kind {
            FenceKind::Code { language } => BlockKind::CodeBlock { language, body },
            FenceKind::Diagram { keyword } => BlockKind::Diagram { keyword, body },
            FenceKind::Math => BlockKind::MathBlock { body },
        };

        self.out.push(BlockNode {
            kind,
            terminator: self.lines[pair.close].newline.clone(),
        });
        pair.close + 1
    }

    fn consume_table(&mut self, start: usize) -> usize {
        let header = table_row(&self.lines[start].text);
        let divider = self.lines[start + 1].text.clone();
        let mut terminator = self.lines[start + 1].newline.clone();

        let mut rows = vec![];
        let mut j = start + 2;
        while j < self.lines.len() && Table::is_row(&self.lines[j].text) {
            rows.push(table_row(&self.lines[j].text));
            terminator = self.lines[j].newline.clone();
            j += 1;
        }

        self.out.push(BlockNode {
            kind: BlockKind::Table(TableBlock {
                header,
                divider,
                rows,
            }),
            terminator,
        });
        j
    }

    fn push_single(&mut self, open: &BlockOpen<'_>, newline: &str) {
        let kind = match open {
            BlockOpen::Heading { level, content } => BlockKind::Heading {
                level: *level,
                children: parse_inline(content),
            },
            BlockOpen::Rule => BlockKind::Rule,
            BlockOpen::Task { checked, content } => BlockKind::ListItem {
                marker: ListMarker::Task { checked: *checked },
                children: parse_inline(content),
            },
            BlockOpen::Bullet { content } => BlockKind::ListItem {
                marker: ListMarker::Bullet,
                children: parse_inline(content),
            },
            BlockOpen::Ordered {
                number,
                marker,
                content,
            } => BlockKind::ListItem {
                marker: ListMarker::Ordered {
                    number: *number,
                    raw: (*marker).to_string(),
                },
                children: parse_inline(content),
            },
            BlockOpen::Quote { content } => BlockKind::Quote {
                children: parse_inline(content),
            },
        };

        self.out.push(BlockNode {
            kind,
            terminator: newline.to_string(),
        });
    }

    fn consume_paragraph(&mut self, start: usize) -> usize {
        let mut children = parse_inline(&self.lines[start].text);
        let mut terminator = self.lines[start].newline.clone();

        let mut j = start + 1;
        while j < self.lines.len() {
            let lc = &self.lines[j];
            let interrupts = lc.is_blank
                || self.pairs[j].is_some()
                || self.table_starts_at(j)
                || try_open_leaf(&lc.text).is_some();
            if interrupts {
                break;
            }
            children.push(Inline::LineBreak);
            children.extend(parse_inline(&lc.text));
            terminator = lc.newline.clone();
            j += 1;
        }

        self.out.push(BlockNode {
            kind: BlockKind::Paragraph { children },
            terminator,
        });
        j
    }
}

fn table_row(raw: &str) -> TableRow {
    TableRow {
        raw: raw.to_string(),
        cells: Table::split_cells(raw)
            .into_iter()
            .map(parse_inline)
            .collect(),
    }
}
