//! Caret mapping between source text and the rendered tree.
//!
//! The editing surface thinks in character offsets into the flattened
//! source; the renderer replaces the whole tree on every change. Because
//! an offset measures text and not structure, it survives the swap: after
//! a render the old offset is placed into the new tree with [`restore`]
//! and measured back with [`save`], which also clamps a caret left past
//! the end by a deletion.
//!
//! All offsets here count characters, not bytes, matching what editing
//! surfaces report.

use crate::markup::Tree;

/// A caret anchored to the tree's leaf sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePos {
    /// Index into [`Tree::leaves`].
    pub leaf: usize,
    /// Character offset within that leaf.
    pub offset: usize,
}

/// Measures a tree position as a source character offset, the length of
/// the flattened text preceding it.
///
/// Positions beyond the tree clamp to the end of the document, so a caret
/// anchored in a longer document measures safely after a deletion.
#[must_use]
pub fn save(tree: &Tree, pos: TreePos) -> usize {
    let leaves = tree.leaves();
    let mut caret = 0;

    for (i, leaf) in leaves.iter().enumerate() {
        let len = leaf.chars().count();
        if i == pos.leaf {
            return caret + pos.offset.min(len);
        }
        caret += len;
    }

    caret
}

/// Places a source character offset in the tree's leaf sequence.
///
/// Walks the text-bearing leaves in document order and stops in the first
/// leaf where the running length reaches the offset, so an offset on the
/// boundary between two leaves belongs to the end of the earlier leaf.
/// Offsets past the end of the document clamp to the last leaf's end; an
/// empty tree yields the origin.
#[must_use]
pub fn restore(tree: &Tree, caret: usize) -> TreePos {
    let leaves = tree.leaves();
    let mut remaining = caret;

    for (i, leaf) in leaves.iter().enumerate() {
        let len = leaf.chars().count();
        if remaining <= len {
            return TreePos {
                leaf: i,
                offset: remaining,
            };
        }
        remaining -= len;
    }

    match leaves.last() {
        Some(last) => TreePos {
            leaf: leaves.len() - 1,
            offset: last.chars().count(),
        },
        None => TreePos { leaf: 0, offset: 0 },
    }
}
