//! Records making up a version-control session: commits, branches, and the
//! persisted session state that ties them together.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a commit. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitId(Uuid);

impl CommitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log listings.
    pub fn short(&self) -> String {
        let mut s = self.0.to_string();
        s.truncate(8);
        s
    }
}

impl Default for CommitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchId(Uuid);

impl BranchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn short(&self) -> String {
        let mut s = self.0.to_string();
        s.truncate(8);
        s
    }
}

impl Default for BranchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line counts summarizing a commit's delta against its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} -{} ~{}",
            self.added, self.removed, self.modified
        )
    }
}

/// An immutable snapshot of document content plus metadata.
///
/// Commits are terminal once created. The one sanctioned mutation is
/// appending to `tags`, which never alters recorded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: CommitId,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub author: String,
    /// Full document text at commit time.
    pub content: String,
    /// Branch this commit was created on.
    pub branch: BranchId,
    /// Previous commit in this line of history. `None` only for the
    /// seeding commit of a fresh session.
    pub parent: Option<CommitId>,
    pub changes: ChangeSummary,
    /// Tag labels. Appended to, never rewritten; duplicates accumulate.
    pub tags: Vec<String>,
}

/// A named movable pointer to a commit.
///
/// Exactly one branch is active at a time; `switch_branch` is the only
/// operation that flips the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    /// Unique within a session.
    pub name: String,
    pub is_active: bool,
    pub last_commit: CommitId,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// The whole persisted version-control state for one document.
///
/// Serialized as a single blob keyed by a document identifier and written
/// back after every mutating operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub versions: Vec<Commit>,
    pub branches: Vec<Branch>,
    pub current_branch: BranchId,
    pub current_version: CommitId,
    pub uncommitted_changes: bool,
}

impl SessionState {
    pub fn commit(&self, id: CommitId) -> Option<&Commit> {
        self.versions.iter().find(|c| c.id == id)
    }

    pub(crate) fn commit_mut(&mut self, id: CommitId) -> Option<&mut Commit> {
        self.versions.iter_mut().find(|c| c.id == id)
    }

    pub fn branch(&self, id: BranchId) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    pub(crate) fn branch_mut(&mut self, id: BranchId) -> Option<&mut Branch> {
        self.branches.iter_mut().find(|b| b.id == id)
    }

    pub fn branch_by_name(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }
}
