//! Inline construct types owning their delimiter constants.

pub mod code_span;
pub mod emphasis;
pub mod footnote;
pub mod links;
pub mod wraps;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use footnote::Footnote;
pub use links::{Image, Link};
pub use wraps::{Highlight, Strike};
