//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts rendered trees to a stable, serializable
//!   `Snap` format for comparison in tests
//! - **`invariants`**: Runtime checks for renderer correctness (flatten
//!   reproduces the source, leaves are non-empty, blocks are separated)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
