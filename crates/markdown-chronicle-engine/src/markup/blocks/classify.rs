use super::kinds::{CodeFence, MathBlock};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a fence signature
/// actually opens a block is decided later by the pairing scan.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Line text without its trailing newline.
    pub text: String,
    /// The trailing newline, `"\n"` or empty on the document's last line.
    pub newline: String,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// If the line looks like a fence delimiter.
    pub fence: Option<FenceSig>,
}

/// A line that could delimit a raw block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceSig {
    /// A backtick fence; the language tag may be empty.
    Code { language: String },
    /// A lone `$$` line.
    Math,
}

/// Splits a document into classified lines.
///
/// The split keeps enough newline information that concatenating
/// `text + newline` over all lines reproduces the source exactly.
pub fn classify_lines(source: &str) -> Vec<LineClass> {
    if source.is_empty() {
        return vec![];
    }

    let mut pieces: Vec<&str> = source.split('\n').collect();

    // A trailing newline produces an empty final piece that is not a line.
    let mut last_has_newline = false;
    if pieces.last() == Some(&"") {
        pieces.pop();
        last_has_newline = true;
    }

    let count = pieces.len();
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let newline = if i < count - 1 || last_has_newline {
                "\n"
            } else {
                ""
            };
            classify(text, newline)
        })
        .collect()
}

/// Classifies one line given its text and exact trailing newline.
pub fn classify(text: &str, newline: &str) -> LineClass {
    let fence = if MathBlock::delimits(text) {
        Some(FenceSig::Math)
    } else {
        CodeFence::try_open(text).map(|language| FenceSig::Code {
            language: language.to_string(),
        })
    };

    LineClass {
        text: text.to_string(),
        newline: newline.to_string(),
        is_blank: text.trim().is_empty(),
        fence,
    }
}
