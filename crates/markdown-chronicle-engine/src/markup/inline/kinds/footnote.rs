/// Footnote reference marker `[^label]`, label restricted to word
/// characters.
pub struct Footnote;

impl Footnote {
    pub const OPEN: &'static str = "[^";
    pub const CLOSE: &'static str = "]";

    /// Whether a byte may appear in a footnote label.
    #[must_use]
    pub fn is_label_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }
}
