/// Hyperlinks `[text](url)` and inline images `![alt](url)`.
///
/// Images are probed at `!` before links are probed at `[`, otherwise the
/// link rule would claim `[alt](url)` and strand the bang.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const CLOSE: &'static str = "]";
    pub const MID: &'static str = "](";
    pub const END: &'static str = ")";
}

pub struct Image;

impl Image {
    pub const OPEN: &'static str = "![";
}
