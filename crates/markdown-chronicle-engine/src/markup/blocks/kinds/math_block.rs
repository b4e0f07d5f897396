/// Display math blocks delimited by `$$` lines.
///
/// Same pairing rule as code fences: the opener only becomes a block if a
/// closing `$$` line follows.
pub struct MathBlock;

impl MathBlock {
    pub const DELIM: &'static str = "$$";

    /// Whether a line opens (or closes) a display math block.
    #[must_use]
    pub fn delimits(line: &str) -> bool {
        line == Self::DELIM
    }
}
