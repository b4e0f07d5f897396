/// Diagram and structured blocks: code fences whose language is one of the
/// reserved keywords. Rendered as a labeled framed verbatim block, never
/// interpreted.
pub struct Diagram;

impl Diagram {
    pub const KEYWORDS: [&'static str; 7] = [
        "mermaid",
        "mindmap",
        "chart",
        "timeline",
        "gantt",
        "sequence",
        "interactive",
    ];

    /// Returns the canonical keyword if the fence language is reserved.
    #[must_use]
    pub fn keyword(language: &str) -> Option<&'static str> {
        Self::KEYWORDS.iter().copied().find(|k| *k == language)
    }
}
