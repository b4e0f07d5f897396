//! Trigger patterns fired by the space key.
//!
//! Each pattern is anchored to the whole line up to the caret, so the
//! patterns are mutually exclusive and first-match order is cosmetic.

use std::sync::OnceLock;

use regex::Regex;

use super::{byte_offset, line_up_to};

/// What the editing surface should do after a trigger fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// A block prefix was completed; re-render within this input turn
    /// instead of waiting for the next natural event.
    Rerender,
    /// The text was rewritten around the caret; apply both, then
    /// re-render.
    Rewrite { text: String, caret: usize },
}

#[derive(Debug, Clone, Copy)]
enum TriggerKind {
    Block,
    /// Complete the typed opening pair into an empty wrapped span and park
    /// the caret between the delimiters.
    Wrap { pair: &'static str },
}

struct Trigger {
    pattern: Regex,
    kind: TriggerKind,
}

static TRIGGERS: OnceLock<Vec<Trigger>> = OnceLock::new();

fn triggers() -> &'static [Trigger] {
    TRIGGERS.get_or_init(|| {
        let block = [
            r"^#{1,6} $",
            r"^- $",
            r"^\d+\. $",
            r"^> $",
            r"^- \[ \] $",
            r"^- \[x\] $",
        ];
        let wraps: [(&str, &str); 4] = [
            (r"^\*\* $", "**"),
            (r"^== $", "=="),
            (r"^~~ $", "~~"),
            (r"^` $", "`"),
        ];

        let mut out: Vec<Trigger> = block
            .iter()
            .map(|p| Trigger {
                pattern: Regex::new(p).expect("invalid trigger pattern"),
                kind: TriggerKind::Block,
            })
            .collect();
        out.extend(wraps.iter().map(|(p, pair)| Trigger {
            pattern: Regex::new(p).expect("invalid trigger pattern"),
            kind: TriggerKind::Wrap { pair },
        }));
        out
    })
}

/// Tests the line up to the caret against the trigger table.
///
/// `caret` is a character offset into `text`. Returns `None` when no
/// trigger matches; the caller then lets the input event proceed normally.
#[must_use]
pub fn check(text: &str, caret: usize) -> Option<Conversion> {
    let byte_caret = byte_offset(text, caret);
    let (line_start, line) = line_up_to(text, byte_caret);

    for trigger in triggers() {
        if trigger.pattern.is_match(line) {
            return Some(match trigger.kind {
                TriggerKind::Block => Conversion::Rerender,
                TriggerKind::Wrap { pair } => rewrite_wrap(text, line_start, byte_caret, pair),
            });
        }
    }
    None
}

fn rewrite_wrap(text: &str, line_start: usize, byte_caret: usize, pair: &str) -> Conversion {
    let mut rewritten =
        String::with_capacity(text.len() + pair.len() * 2 - (byte_caret - line_start));
    rewritten.push_str(&text[..line_start]);
    rewritten.push_str(pair);
    rewritten.push_str(pair);
    rewritten.push_str(&text[byte_caret..]);

    let caret = text[..line_start].chars().count() + pair.chars().count();
    Conversion::Rewrite {
        text: rewritten,
        caret,
    }
}
