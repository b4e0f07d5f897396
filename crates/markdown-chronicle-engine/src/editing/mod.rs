//! # Editing Sessions
//!
//! What an editing surface holds while a document is open.
//!
//! The surface owns input events; the engine owns meaning. A surface
//! forwards each event to [`EditorSession`], which applies the edit to
//! the rope-backed [`Document`], runs the keystroke-time conversions,
//! re-renders the markup tree, restores the caret across the
//! replacement, and offers the result to the undo history. The surface
//! then displays whatever the session hands back.
//!
//! - **`document`**: the rope buffer holding the authoritative text
//! - **`session`**: the event-level glue over rendering, caret
//!   restoration, conversions, and history

pub mod document;
pub mod session;

pub use document::Document;
pub use session::EditorSession;
