/// Heading block type with owned marker knowledge.
///
/// A heading is 1-6 `#` characters followed by one required space; the
/// space is part of the marker and everything after it is inline content.
pub struct Heading;

impl Heading {
    pub const MARK: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    const MARKERS: [&'static str; 6] = ["#", "##", "###", "####", "#####", "######"];

    /// The `#` run for a given level (1-6).
    #[must_use]
    pub fn marker(level: u8) -> &'static str {
        Self::MARKERS[usize::from(level.clamp(1, Self::MAX_LEVEL)) - 1]
    }

    /// Tries to read a heading opener off the start of a line.
    ///
    /// Returns the level and the content after the marker and its space.
    /// `#Title` (no space) and `####### x` (7 markers) are not headings.
    pub fn try_open(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARK).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let rest = &line[hashes..];
        let content = rest.strip_prefix(' ')?;
        Some((hashes as u8, content))
    }
}
