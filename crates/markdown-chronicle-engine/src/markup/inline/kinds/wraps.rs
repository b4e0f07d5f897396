/// Two-character wrapping pairs with no delimiter ambiguity:
/// strikethrough and highlight.
pub struct Strike;

impl Strike {
    pub const DELIM: &'static str = "~~";
}

pub struct Highlight;

impl Highlight {
    pub const DELIM: &'static str = "==";
}
