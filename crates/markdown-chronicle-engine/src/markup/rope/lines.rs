use xi_rope::Rope;

use super::span::Span;

/// A single physical line of the source with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: String,
}

impl LineRef {
    /// The line with its trailing `\n` stripped; classification works on this.
    #[must_use]
    pub fn without_newline(&self) -> &str {
        self.text.strip_suffix('\n').unwrap_or(&self.text)
    }

    /// Byte length of the trailing newline (0 or 1).
    #[must_use]
    pub fn newline_len(&self) -> usize {
        if self.text.ends_with('\n') { 1 } else { 0 }
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so newline characters stay attached; block terminators
/// are assembled from these exact bytes and flattening depends on them.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
