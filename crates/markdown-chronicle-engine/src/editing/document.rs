//! The rope buffer underneath an editing session.

use std::ops::Range;

use xi_rope::Rope;

/// The authoritative text of one open document.
///
/// The whole document lives in a single `xi_rope::Rope`; edits replace
/// byte ranges of that buffer and nothing is ever regenerated from a
/// model, so [`Document::to_bytes`] returns the loaded content plus the
/// edits applied since, byte for byte.
pub struct Document {
    buffer: Rope,
    /// Current selection as byte offsets into the buffer.
    selection: Range<usize>,
    /// Incremented on every edit, for change detection.
    version: u64,
}

impl Document {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: len..len,
            version: 0,
        }
    }

    /// Creates a document from raw file bytes, which must be UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::new(std::str::from_utf8(bytes)?))
    }

    #[must_use]
    pub fn rope(&self) -> &Rope {
        &self.buffer
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// The document's content as bytes, suitable for saving verbatim.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Buffer length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Buffer length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.buffer
            .iter_chunks(..)
            .map(|chunk| chunk.chars().count())
            .sum()
    }

    /// Byte offset of a character offset, clamped to the buffer end.
    ///
    /// Editing surfaces report caret positions in characters; rope edits
    /// take bytes. This is the bridge between the two.
    #[must_use]
    pub fn byte_of_char(&self, chars: usize) -> usize {
        let mut remaining = chars;
        let mut offset = 0;
        for chunk in self.buffer.iter_chunks(..) {
            let in_chunk = chunk.chars().count();
            if remaining < in_chunk {
                let within = chunk
                    .char_indices()
                    .nth(remaining)
                    .map_or(chunk.len(), |(i, _)| i);
                return offset + within;
            }
            remaining -= in_chunk;
            offset += chunk.len();
        }
        offset
    }

    /// Replaces a byte range of the buffer with new text.
    ///
    /// Out-of-range bounds clamp to the buffer, so a stale range from a
    /// view that lagged behind an edit lands harmlessly. The selection
    /// collapses to the end of the inserted text.
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let range = self.clamp(range);
        let caret = range.start + text.len();
        self.buffer.edit(range, text);
        self.selection = caret..caret;
        self.version += 1;
    }

    pub fn insert(&mut self, at: usize, text: &str) {
        self.replace(at..at, text);
    }

    pub fn delete(&mut self, range: Range<usize>) {
        self.replace(range, "");
    }

    /// Swaps the entire content, as checkout and undo do.
    pub fn replace_all(&mut self, text: &str) {
        let len = self.buffer.len();
        self.replace(0..len, text);
    }

    /// Current selection range in bytes.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn set_selection(&mut self, selection: Range<usize>) {
        self.selection = self.clamp(selection);
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        start..end
    }
}
