//! On-disk persistence for version-control session state.
//!
//! Each document's state is one JSON blob named after the document key,
//! living under a state directory. The whole blob is rewritten on save;
//! there are no partial updates.

use crate::vcs::types::SessionState;
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read session state at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write session state at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse session state at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize session state for {key}: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

/// A directory of per-document session state blobs.
#[derive(Debug, Clone)]
pub struct VersionStore {
    dir: PathBuf,
}

impl VersionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the blob for `key` lives.
    pub fn state_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }

    /// Loads the state stored under `key`. A missing blob is not an error.
    pub fn load(&self, key: &str) -> Result<Option<SessionState>, StoreError> {
        let path = self.state_path(key);
        if !path.exists() {
            debug!("no session state for {key} at {}", path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        let state: SessionState =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(
            "loaded session state for {key}: {} commits, {} branches",
            state.versions.len(),
            state.branches.len()
        );
        Ok(Some(state))
    }

    /// Writes the full state blob for `key`, creating the directory first.
    pub fn save(&self, key: &str, state: &SessionState) -> Result<(), StoreError> {
        let path = self.state_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;
        }

        let content =
            serde_json::to_string_pretty(state).map_err(|source| StoreError::Serialize {
                key: key.to_string(),
                source,
            })?;
        std::fs::write(&path, content).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        debug!("saved session state for {key} to {}", path.display());
        Ok(())
    }
}

/// Flattens a document key into a single safe file stem. Path separators and
/// other unusual characters become dashes so every key maps to one file
/// directly under the store directory.
fn file_stem(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcs::types::{Branch, BranchId, ChangeSummary, Commit, CommitId, SessionState};
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_state() -> SessionState {
        let branch_id = BranchId::new();
        let commit_id = CommitId::new();
        SessionState {
            versions: vec![Commit {
                id: commit_id,
                timestamp: Utc::now(),
                message: "Initial document".to_string(),
                author: "ada".to_string(),
                content: "# Notes\n".to_string(),
                branch: branch_id,
                parent: None,
                changes: ChangeSummary {
                    added: 2,
                    removed: 0,
                    modified: 0,
                },
                tags: vec!["v1.0.0".to_string()],
            }],
            branches: vec![Branch {
                id: branch_id,
                name: "main".to_string(),
                is_active: true,
                last_commit: commit_id,
                created_at: Utc::now(),
                created_by: "ada".to_string(),
            }],
            current_branch: branch_id,
            current_version: commit_id,
            uncommitted_changes: false,
        }
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::new(dir.path());
        let state = sample_state();

        store.save("notes.md", &state).unwrap();
        let loaded = store.load("notes.md").unwrap().unwrap();

        assert_eq!(loaded, state);
        // Timestamps survive serialization exactly, not just to the second.
        assert_eq!(loaded.versions[0].timestamp, state.versions[0].timestamp);
    }

    #[test]
    fn missing_blob_is_none() {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::new(dir.path());
        assert!(store.load("never-saved.md").unwrap().is_none());
    }

    #[test]
    fn keys_with_separators_stay_in_the_store_dir() {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::new(dir.path());

        store.save("journal/2024/january.md", &sample_state()).unwrap();

        let path = store.state_path("journal/2024/january.md");
        assert_eq!(path.parent().unwrap(), dir.path());
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "journal-2024-january.md.json"
        );
        assert!(path.exists());
    }

    #[test]
    fn corrupt_blob_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = VersionStore::new(dir.path());
        std::fs::write(store.state_path("bad.md"), "not json").unwrap();

        let result = store.load("bad.md");
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn save_creates_the_state_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("state").join("deep");
        let store = VersionStore::new(&nested);

        store.save("doc.md", &sample_state()).unwrap();

        assert!(nested.exists());
        assert!(store.load("doc.md").unwrap().is_some());
    }
}
