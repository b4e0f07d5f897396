/// A cursor for byte-by-byte inline parsing with save/restore semantics.
///
/// Probe functions clone the cursor before consuming and restore the clone
/// on a failed match, so an unmatched construct costs nothing and its
/// characters fall through as literal text.
///
/// Positions are byte indices into `s`. All delimiters are ASCII, so every
/// slice boundary the parser produces is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed (one line of block content).
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte immediately before the current position.
    pub fn prev(&self) -> Option<u8> {
        self.i.checked_sub(1).map(|j| self.s.as_bytes()[j])
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. No bounds check; callers advance by the
    /// length of a pattern they just matched.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Slices the input between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
