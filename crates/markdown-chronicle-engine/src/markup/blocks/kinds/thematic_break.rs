/// Horizontal rule: a line that is exactly `---`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const LINE: &'static str = "---";

    #[must_use]
    pub fn matches(line: &str) -> bool {
        line == Self::LINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_matches() {
        assert!(ThematicBreak::matches("---"));
    }

    #[test]
    fn longer_runs_do_not_match() {
        assert!(!ThematicBreak::matches("----"));
        assert!(!ThematicBreak::matches("--- "));
    }
}
