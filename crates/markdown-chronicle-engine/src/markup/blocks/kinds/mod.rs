//! Block-level construct types. Each kind owns its delimiter constants and
//! line-probing logic so syntax knowledge has exactly one home.

pub mod block_quote;
pub mod code_fence;
pub mod diagram;
pub mod heading;
pub mod list_item;
pub mod math_block;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use diagram::Diagram;
pub use heading::Heading;
pub use list_item::ListItem;
pub use math_block::MathBlock;
pub use table::Table;
pub use thematic_break::ThematicBreak;
