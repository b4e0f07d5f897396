//! # Version Control
//!
//! An append-only commit graph over full-document snapshots, with named
//! branches, tags, a positional line diff, and JSON persistence.
//!
//! [`VersionControl`] owns one document's history plus a working copy of its
//! text. Mutating operations write the whole session state back through the
//! [`VersionStore`] handed in at [`VersionControl::open`]; lookups are pure.
//! Precondition failures (unknown ids, duplicate branch names, empty commits)
//! come back as `None` or `false` inside `Ok`; the error channel is reserved
//! for the store.

pub mod diff;
pub mod merge;
pub mod store;
pub mod types;

use chrono::Utc;
use log::{debug, info, warn};

pub use diff::{DiffEntry, diff_lines, summarize};
pub use store::{StoreError, VersionStore};
pub use types::{Branch, BranchId, ChangeSummary, Commit, CommitId, SessionState};

/// Branch every fresh session starts on.
pub const MAIN_BRANCH: &str = "main";
const INITIAL_MESSAGE: &str = "Initial document";
const INITIAL_TAG: &str = "v1.0.0";

/// One document's version history plus the working copy of its text.
///
/// Construction goes through [`VersionControl::open`], which loads the
/// persisted state for the document key or seeds a fresh history. After
/// opening an existing session the working copy is the current commit's
/// content; callers holding newer text (an edited file on disk) should
/// hand it over with [`VersionControl::set_working_text`].
pub struct VersionControl {
    key: String,
    store: VersionStore,
    state: SessionState,
    working: String,
}

impl VersionControl {
    /// Loads the session stored under `key`, or seeds a new one from
    /// `initial_content` on an active `main` branch.
    pub fn open(
        store: VersionStore,
        key: impl Into<String>,
        initial_content: &str,
        author: &str,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        let state = match store.load(&key)? {
            Some(state) => state,
            None => {
                let state = Self::seed(initial_content, author);
                store.save(&key, &state)?;
                info!("seeded version history for {key}");
                state
            }
        };

        let working = state
            .commit(state.current_version)
            .map(|c| c.content.clone())
            .unwrap_or_default();

        Ok(Self {
            key,
            store,
            state,
            working,
        })
    }

    fn seed(initial_content: &str, author: &str) -> SessionState {
        let branch_id = BranchId::new();
        let commit = Commit {
            id: CommitId::new(),
            timestamp: Utc::now(),
            message: INITIAL_MESSAGE.to_string(),
            author: author.to_string(),
            content: initial_content.to_string(),
            branch: branch_id,
            parent: None,
            changes: ChangeSummary {
                added: initial_content.split('\n').count(),
                removed: 0,
                modified: 0,
            },
            tags: vec![INITIAL_TAG.to_string()],
        };
        let branch = Branch {
            id: branch_id,
            name: MAIN_BRANCH.to_string(),
            is_active: true,
            last_commit: commit.id,
            created_at: commit.timestamp,
            created_by: author.to_string(),
        };

        SessionState {
            current_branch: branch_id,
            current_version: commit.id,
            versions: vec![commit],
            branches: vec![branch],
            uncommitted_changes: false,
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.key, &self.state)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn working_text(&self) -> &str {
        &self.working
    }

    pub fn has_uncommitted_changes(&self) -> bool {
        self.state.uncommitted_changes
    }

    pub fn current_commit(&self) -> Option<&Commit> {
        self.state.commit(self.state.current_version)
    }

    pub fn current_branch(&self) -> Option<&Branch> {
        self.state.branch(self.state.current_branch)
    }

    /// Replaces the working copy and re-derives the uncommitted flag. The
    /// state blob is rewritten only when the flag actually flips.
    pub fn set_working_text(&mut self, text: &str) -> Result<(), StoreError> {
        self.working.clear();
        self.working.push_str(text);

        let dirty = self
            .state
            .commit(self.state.current_version)
            .map_or(true, |c| c.content != self.working);
        if dirty != self.state.uncommitted_changes {
            self.state.uncommitted_changes = dirty;
            self.persist()?;
        }
        Ok(())
    }

    /// Records the working copy as a new commit on the current branch.
    ///
    /// Returns `Ok(None)` without touching history when the message is
    /// blank or the working copy matches the current commit.
    pub fn commit(&mut self, message: &str, author: &str) -> Result<Option<CommitId>, StoreError> {
        if message.trim().is_empty() {
            warn!("rejecting commit with empty message");
            return Ok(None);
        }
        let Some(current) = self.state.commit(self.state.current_version) else {
            warn!(
                "current version {} is missing from history",
                self.state.current_version
            );
            return Ok(None);
        };
        if current.content == self.working {
            debug!("nothing to commit for {}", self.key);
            return Ok(None);
        }

        let entries = diff::diff_lines(&current.content, &self.working);
        let changes = diff::summarize(&entries);
        let parent = current.id;

        let commit = Commit {
            id: CommitId::new(),
            timestamp: Utc::now(),
            message: message.to_string(),
            author: author.to_string(),
            content: self.working.clone(),
            branch: self.state.current_branch,
            parent: Some(parent),
            changes,
            tags: Vec::new(),
        };
        let id = commit.id;
        self.state.versions.push(commit);
        self.state.current_version = id;
        let branch_id = self.state.current_branch;
        if let Some(branch) = self.state.branch_mut(branch_id) {
            branch.last_commit = id;
        }
        self.state.uncommitted_changes = false;
        self.persist()?;

        info!("committed {} ({changes})", id.short());
        Ok(Some(id))
    }

    /// Moves the session to `version` and returns its content for the
    /// caller to install as working text. The current branch is untouched.
    pub fn checkout(&mut self, version: CommitId) -> Result<Option<String>, StoreError> {
        let Some(commit) = self.state.commit(version) else {
            warn!("checkout of unknown version {version}");
            return Ok(None);
        };
        let content = commit.content.clone();

        self.state.current_version = version;
        self.state.uncommitted_changes = false;
        self.working = content.clone();
        self.persist()?;

        info!("checked out {}", version.short());
        Ok(Some(content))
    }

    /// Creates an inactive branch pointing at `from`, defaulting to the
    /// current version. Branch names are unique.
    pub fn create_branch(
        &mut self,
        name: &str,
        author: &str,
        from: Option<CommitId>,
    ) -> Result<Option<BranchId>, StoreError> {
        if self.state.branch_by_name(name).is_some() {
            warn!("branch {name} already exists");
            return Ok(None);
        }
        let base = from.unwrap_or(self.state.current_version);
        if self.state.commit(base).is_none() {
            warn!("cannot branch from unknown version {base}");
            return Ok(None);
        }

        let branch = Branch {
            id: BranchId::new(),
            name: name.to_string(),
            is_active: false,
            last_commit: base,
            created_at: Utc::now(),
            created_by: author.to_string(),
        };
        let id = branch.id;
        self.state.branches.push(branch);
        self.persist()?;

        info!("created branch {name} at {}", base.short());
        Ok(Some(id))
    }

    /// Makes `branch` the active branch, loading its last commit's content.
    /// Exactly one branch is active afterwards.
    pub fn switch_branch(&mut self, branch: BranchId) -> Result<Option<String>, StoreError> {
        let Some(target) = self.state.branch(branch) else {
            warn!("switch to unknown branch {branch}");
            return Ok(None);
        };
        let name = target.name.clone();
        let last = target.last_commit;
        let Some(commit) = self.state.commit(last) else {
            warn!("branch {name} points at missing commit {last}");
            return Ok(None);
        };
        let content = commit.content.clone();

        self.state.current_branch = branch;
        self.state.current_version = last;
        self.state.uncommitted_changes = false;
        for b in &mut self.state.branches {
            b.is_active = b.id == branch;
        }
        self.working = content.clone();
        self.persist()?;

        info!("switched to branch {name}");
        Ok(Some(content))
    }

    /// Appends a tag to a commit. Duplicate tags accumulate; blank tags and
    /// unknown versions are rejected.
    pub fn add_tag(&mut self, version: CommitId, tag: &str) -> Result<bool, StoreError> {
        if tag.trim().is_empty() {
            warn!("ignoring empty tag");
            return Ok(false);
        }
        let Some(commit) = self.state.commit_mut(version) else {
            warn!("cannot tag unknown version {version}");
            return Ok(false);
        };
        commit.tags.push(tag.to_string());
        self.persist()?;

        info!("tagged {} as {tag}", version.short());
        Ok(true)
    }

    /// Merges `source` into `target`, producing one commit on the target
    /// branch whose parent is the target's previous last commit. The source
    /// lineage is not recorded. Only the commit list and the target branch
    /// pointer move; the current version and working copy stay put, so the
    /// caller decides whether to check the merge commit out.
    pub fn merge_branch(
        &mut self,
        source: BranchId,
        target: BranchId,
        message: &str,
        author: &str,
    ) -> Result<Option<CommitId>, StoreError> {
        let Some(source_branch) = self.state.branch(source) else {
            warn!("merge from unknown branch {source}");
            return Ok(None);
        };
        let source_name = source_branch.name.clone();
        let source_last = source_branch.last_commit;
        let Some(target_branch) = self.state.branch(target) else {
            warn!("merge into unknown branch {target}");
            return Ok(None);
        };
        let target_name = target_branch.name.clone();
        let target_last = target_branch.last_commit;

        let Some(source_commit) = self.state.commit(source_last) else {
            warn!("branch {source_name} points at missing commit {source_last}");
            return Ok(None);
        };
        let Some(target_commit) = self.state.commit(target_last) else {
            warn!("branch {target_name} points at missing commit {target_last}");
            return Ok(None);
        };

        let merged = merge::resolve(&target_commit.content, &source_commit.content).to_string();
        let commit = Commit {
            id: CommitId::new(),
            timestamp: Utc::now(),
            message: format!("{message} (Merge {source_name} into {target_name})"),
            author: author.to_string(),
            content: merged,
            branch: target,
            parent: Some(target_last),
            changes: ChangeSummary {
                added: 0,
                removed: 0,
                modified: 1,
            },
            tags: Vec::new(),
        };
        let id = commit.id;
        self.state.versions.push(commit);
        if let Some(branch) = self.state.branch_mut(target) {
            branch.last_commit = id;
        }
        self.persist()?;

        info!("merged {source_name} into {target_name} as {}", id.short());
        Ok(Some(id))
    }

    /// Line diff between two commits' contents. The first argument is the
    /// old side.
    pub fn compare_versions(&self, old: CommitId, new: CommitId) -> Option<Vec<DiffEntry>> {
        let old_commit = self.state.commit(old)?;
        let new_commit = self.state.commit(new)?;
        Some(diff_lines(&old_commit.content, &new_commit.content))
    }

    /// Finds a commit by unique id prefix, or failing that by unique tag.
    pub fn resolve_commit(&self, needle: &str) -> Option<&Commit> {
        if needle.is_empty() {
            return None;
        }
        let mut by_id = self
            .state
            .versions
            .iter()
            .filter(|c| c.id.to_string().starts_with(needle));
        if let (Some(commit), None) = (by_id.next(), by_id.next()) {
            return Some(commit);
        }

        let mut by_tag = self
            .state
            .versions
            .iter()
            .filter(|c| c.tags.iter().any(|t| t == needle));
        match (by_tag.next(), by_tag.next()) {
            (Some(commit), None) => Some(commit),
            _ => None,
        }
    }

    /// Finds a branch by exact name, or failing that by unique id prefix.
    pub fn resolve_branch(&self, needle: &str) -> Option<&Branch> {
        if let Some(branch) = self.state.branch_by_name(needle) {
            return Some(branch);
        }
        if needle.is_empty() {
            return None;
        }
        let mut by_id = self
            .state
            .branches
            .iter()
            .filter(|b| b.id.to_string().starts_with(needle));
        match (by_id.next(), by_id.next()) {
            (Some(branch), None) => Some(branch),
            _ => None,
        }
    }
}
