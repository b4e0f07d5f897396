/// A byte range `[start, end)` into the source rope.
///
/// Line classification and block assembly track spans rather than copied
/// text; the tree-building step slices them out once, at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Narrows the span by `n` bytes from the start.
    #[must_use]
    pub fn advance(self, n: usize) -> Span {
        Span {
            start: (self.start + n).min(self.end),
            end: self.end,
        }
    }
}
