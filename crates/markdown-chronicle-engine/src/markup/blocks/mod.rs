//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! 1. **Line classification** (`classify`): each line becomes a
//!    [`LineClass`] of local facts (blank status, fence signature, exact
//!    newline), with no reference to surrounding context.
//!
//! 2. **Block construction** (`builder`): a fence pairing scan resolves
//!    which fence signatures actually delimit raw blocks, then
//!    [`BlockBuilder`] walks the classified lines and assembles the tree,
//!    looking one line ahead for table dividers.
//!
//! Fenced code, diagram, and math blocks are raw zones: nothing inside
//! them is parsed. An unpaired fence opener is not a block at all and its
//! lines fall through to ordinary paragraph handling.

pub mod builder;
pub mod classify;
pub mod fences;
pub mod kinds;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify_lines};
