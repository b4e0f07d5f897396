//! Positional line diff.
//!
//! Both line sequences are walked with independent cursors and compared slot
//! by slot. There is no realignment step, so a single inserted line reports
//! every later line as modified instead of re-syncing. The output is O(n),
//! order-sensitive, and feeds [`ChangeSummary`] counts.

use crate::vcs::types::ChangeSummary;
use std::fmt;

/// One line-level difference. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    Added {
        new_line: usize,
        new_text: String,
    },
    Removed {
        old_line: usize,
        old_text: String,
    },
    Modified {
        old_line: usize,
        new_line: usize,
        old_text: String,
        new_text: String,
    },
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffEntry::Added { new_line, new_text } => {
                write!(f, "+ {new_line} | {new_text}")
            }
            DiffEntry::Removed { old_line, old_text } => {
                write!(f, "- {old_line} | {old_text}")
            }
            DiffEntry::Modified {
                old_line,
                old_text,
                new_text,
                ..
            } => {
                write!(f, "~ {old_line} | {old_text} -> {new_text}")
            }
        }
    }
}

/// Diffs `old` against `new` line by line.
///
/// Lines are produced by splitting on `\n`, so empty text counts as one
/// empty line and a trailing newline contributes a final empty line. Equal
/// slots produce no entry.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffEntry> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    let mut entries = Vec::new();

    let mut old_index = 0;
    let mut new_index = 0;
    while old_index < old_lines.len() || new_index < new_lines.len() {
        if old_index >= old_lines.len() {
            entries.push(DiffEntry::Added {
                new_line: new_index + 1,
                new_text: new_lines[new_index].to_string(),
            });
            new_index += 1;
        } else if new_index >= new_lines.len() {
            entries.push(DiffEntry::Removed {
                old_line: old_index + 1,
                old_text: old_lines[old_index].to_string(),
            });
            old_index += 1;
        } else if old_lines[old_index] == new_lines[new_index] {
            old_index += 1;
            new_index += 1;
        } else {
            entries.push(DiffEntry::Modified {
                old_line: old_index + 1,
                new_line: new_index + 1,
                old_text: old_lines[old_index].to_string(),
                new_text: new_lines[new_index].to_string(),
            });
            old_index += 1;
            new_index += 1;
        }
    }

    entries
}

/// Tallies entries into per-kind line counts.
pub fn summarize(entries: &[DiffEntry]) -> ChangeSummary {
    let mut summary = ChangeSummary::default();
    for entry in entries {
        match entry {
            DiffEntry::Added { .. } => summary.added += 1,
            DiffEntry::Removed { .. } => summary.removed += 1,
            DiffEntry::Modified { .. } => summary.modified += 1,
        }
    }
    summary
}
