//! Inline parsing for block content lines.
//!
//! Works on one line at a time with a byte cursor; each construct is
//! probed where its delimiter could open and falls back to literal text
//! when the closer is missing, so flattening the resulting leaves always
//! reproduces the line.

mod cursor;
pub mod kinds;
mod parser;

pub use parser::parse_inline;
