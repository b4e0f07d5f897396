use crate::markup::tree::{BlockKind, Tree};

/// Validates rendering invariants for a tree against its source.
///
/// Asserts that:
/// - Flattening the tree reproduces the source exactly
/// - Every leaf is non-empty
/// - Every block except the last is terminated by a newline run
/// - Heading levels stay in range
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, tree: &Tree) {
    let flat = tree.flatten();
    assert!(
        flat == source,
        "flatten diverged from source:\n  source:  {source:?}\n  flatten: {flat:?}"
    );

    for leaf in tree.leaves() {
        assert!(!leaf.is_empty(), "empty leaf in tree for {source:?}");
    }

    for (i, block) in tree.blocks.iter().enumerate() {
        if i + 1 < tree.blocks.len() {
            assert!(
                block.terminator.starts_with('\n'),
                "block {i} not separated from its successor: {:?}",
                block.terminator
            );
        }
        assert!(
            block.terminator.chars().all(char::is_whitespace),
            "non-whitespace terminator on block {i}: {:?}",
            block.terminator
        );
        if let BlockKind::Heading { level, .. } = block.kind {
            assert!((1..=6).contains(&level), "heading level out of range: {level}");
        }
    }
}
