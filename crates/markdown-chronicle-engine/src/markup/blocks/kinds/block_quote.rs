/// Block quote lines: a `> ` prefix followed by non-empty content.
///
/// Each quoted line stands alone; consecutive quote lines group only in the
/// display projection.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Tries to read a quote line; returns the content after the prefix.
    pub fn try_open(line: &str) -> Option<&str> {
        let content = line.strip_prefix(Self::PREFIX)?;
        if content.is_empty() {
            return None;
        }
        Some(content)
    }
}
