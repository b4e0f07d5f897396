use super::classify::{FenceSig, LineClass};
use super::kinds::{CodeFence, Diagram, MathBlock};

/// What a paired fence opener turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceKind {
    Code { language: String },
    Diagram { keyword: &'static str },
    Math,
}

/// A resolved opener, pointing at the line that closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencePair {
    pub kind: FenceKind,
    pub close: usize,
}

/// Pairs fence openers with their closing lines.
///
/// Scans top to bottom with at most one fence open at a time. Lines inside
/// an open fence are raw, so a `$$` inside a code fence is body text, not a
/// math delimiter. An opener with no closer before the end of the document
/// is left unpaired and its line falls through to ordinary block parsing.
///
/// The result has one slot per line; only paired opener lines are `Some`.
pub fn pair_fences(lines: &[LineClass]) -> Vec<Option<FencePair>> {
    let mut pairs: Vec<Option<FencePair>> = vec![None; lines.len()];
    let mut open: Option<(usize, FenceSig)> = None;

    for (i, lc) in lines.iter().enumerate() {
        match &open {
            None => {
                if let Some(sig) = &lc.fence {
                    open = Some((i, sig.clone()));
                }
            }
            Some((start, sig)) => {
                let closes = match sig {
                    FenceSig::Code { .. } => CodeFence::closes(&lc.text),
                    FenceSig::Math => MathBlock::delimits(&lc.text),
                };
                if closes {
                    pairs[*start] = Some(FencePair {
                        kind: resolve(sig),
                        close: i,
                    });
                    open = None;
                }
            }
        }
    }

    pairs
}

fn resolve(sig: &FenceSig) -> FenceKind {
    match sig {
        FenceSig::Math => FenceKind::Math,
        FenceSig::Code { language } => match Diagram::keyword(language) {
            Some(keyword) => FenceKind::Diagram { keyword },
            None => FenceKind::Code {
                language: language.clone(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::blocks::classify::classify_lines;

    #[test]
    fn pairs_a_code_fence() {
        let lines = classify_lines("```rust\nlet x = 1;\n```\n");
        let pairs = pair_fences(&lines);
        assert_eq!(
            pairs[0],
            Some(FencePair {
                kind: FenceKind::Code {
                    language: "rust".to_string()
                },
                close: 2,
            })
        );
        assert_eq!(pairs[1], None);
        assert_eq!(pairs[2], None);
    }

    #[test]
    fn unterminated_fence_stays_unpaired() {
        let lines = classify_lines("```rust\nlet x = 1;");
        assert!(pair_fences(&lines).iter().all(Option::is_none));
    }

    #[test]
    fn math_delimiter_inside_code_is_body() {
        let lines = classify_lines("```\n$$\n```\n$$\nE=mc^2\n$$\n");
        let pairs = pair_fences(&lines);
        assert_eq!(pairs[0].as_ref().map(|p| p.close), Some(2));
        assert_eq!(
            pairs[3],
            Some(FencePair {
                kind: FenceKind::Math,
                close: 5,
            })
        );
    }

    #[test]
    fn diagram_keyword_resolves_fence_kind() {
        let lines = classify_lines("```mermaid\ngraph TD\n```\n");
        let pairs = pair_fences(&lines);
        assert_eq!(
            pairs[0].as_ref().map(|p| &p.kind),
            Some(&FenceKind::Diagram { keyword: "mermaid" })
        );
    }

    #[test]
    fn second_opener_inside_open_fence_is_not_a_closer() {
        // A language-tagged fence line cannot close a fence.
        let lines = classify_lines("```rust\n```python\n```\n");
        let pairs = pair_fences(&lines);
        assert_eq!(pairs[0].as_ref().map(|p| p.close), Some(2));
        assert_eq!(pairs[1], None);
    }
}
