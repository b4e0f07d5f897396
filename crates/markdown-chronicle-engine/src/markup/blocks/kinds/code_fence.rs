/// Fenced code block type with owned delimiter constants.
///
/// Opening fences carry an optional language word; a fence only becomes a
/// block if a closing fence line exists later in the document (unpaired
/// fences stay literal text).
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Tries to read an opening fence from a full line (newline stripped).
    ///
    /// Returns the language tag, which may be empty. Lines with whitespace
    /// after the fence are not openers.
    pub fn try_open(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::FENCE)?;
        if rest.contains(char::is_whitespace) {
            return None;
        }
        Some(rest)
    }

    /// Whether a line closes an open code fence.
    #[must_use]
    pub fn closes(line: &str) -> bool {
        line == Self::FENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_language() {
        assert_eq!(CodeFence::try_open("```rust"), Some("rust"));
    }

    #[test]
    fn opens_without_language() {
        assert_eq!(CodeFence::try_open("```"), Some(""));
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert_eq!(CodeFence::try_open("``` rust"), None);
        assert_eq!(CodeFence::try_open("```rust "), None);
    }

    #[test]
    fn rejects_non_fence() {
        assert_eq!(CodeFence::try_open("``not a fence"), None);
    }

    #[test]
    fn bare_fence_closes() {
        assert!(CodeFence::closes("```"));
        assert!(!CodeFence::closes("```rust"));
    }
}
