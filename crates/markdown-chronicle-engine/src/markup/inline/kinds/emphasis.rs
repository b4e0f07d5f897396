/// Strong and regular emphasis share the `*` delimiter character, so both
/// live here. Strong (`**`) is probed before emphasis (`*`), and emphasis
/// refuses to sit adjacent to another `*` so it never eats half of a strong
/// delimiter.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
}
