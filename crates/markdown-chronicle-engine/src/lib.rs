pub mod caret;
pub mod editing;
pub mod history;
pub mod io;
pub mod markup;
pub mod smart;
pub mod vcs;


// Re-export key types for easier usage
pub use editing::{Document, EditorSession};
pub use history::{EditHistory, Entry};
pub use io::*;
pub use markup::{BlockKind, BlockNode, Inline, ListMarker, Tree, render, render_str, to_html};
pub use vcs::{
    Branch, BranchId, ChangeSummary, Commit, CommitId, DiffEntry, SessionState, VersionControl,
    VersionStore, diff_lines,
};
