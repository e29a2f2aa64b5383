//! Puzzle progress persistence.
//!
//! A small key-value store keyed by puzzle id, holding how many parts of
//! each puzzle have been completed. Backed by a pretty-printed JSON file so
//! it survives restarts; an in-memory mode exists for tests and for running
//! without a writable home directory.
//!
//! Absent progress is reported as `None`, distinct from zero progress, so
//! callers can tell "never played" from "played and reset".

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store I/O failure.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("failed to access progress file: {0}")]
    Io(#[from] std::io::Error),
    #[error("progress file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Progress through one puzzle's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleProgress {
    pub completed_parts: u32,
    pub total_parts: u32,
}

impl PuzzleProgress {
    pub fn is_complete(&self) -> bool {
        self.total_parts > 0 && self.completed_parts >= self.total_parts
    }
}

/// Key-value progress store, optionally backed by a JSON file.
///
/// File-backed mutations write through immediately; losing at most the
/// in-flight write on a crash.
#[derive(Debug)]
pub struct ProgressStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, PuzzleProgress>,
}

impl ProgressStore {
    /// Open a file-backed store. A missing file yields an empty store; it
    /// is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProgressError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        log::debug!("progress store at {:?}: {} entries", path, entries.len());
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored progress for a puzzle, or `None` if never recorded.
    pub fn get(&self, puzzle_id: &str) -> Option<PuzzleProgress> {
        self.entries.get(puzzle_id).copied()
    }

    /// Record progress for a puzzle.
    pub fn set(
        &mut self,
        puzzle_id: &str,
        completed_parts: u32,
        total_parts: u32,
    ) -> Result<(), ProgressError> {
        self.entries.insert(
            puzzle_id.to_string(),
            PuzzleProgress {
                completed_parts,
                total_parts,
            },
        );
        self.flush()
    }

    /// Forget one puzzle's progress.
    pub fn clear(&mut self, puzzle_id: &str) -> Result<(), ProgressError> {
        if self.entries.remove(puzzle_id).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    /// Forget everything.
    pub fn clear_all(&mut self) -> Result<(), ProgressError> {
        self.entries.clear();
        self.flush()
    }

    fn flush(&self) -> Result<(), ProgressError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_distinct_from_zero() {
        let mut store = ProgressStore::in_memory();
        assert_eq!(store.get("never-played"), None);

        store.set("reset", 0, 3).unwrap();
        assert_eq!(
            store.get("reset"),
            Some(PuzzleProgress {
                completed_parts: 0,
                total_parts: 3
            })
        );
    }

    #[test]
    fn test_set_get_clear_roundtrip() {
        let mut store = ProgressStore::in_memory();
        store.set("animals", 2, 3).unwrap();
        store.set("cities", 1, 1).unwrap();

        assert!(!store.get("animals").unwrap().is_complete());
        assert!(store.get("cities").unwrap().is_complete());

        store.clear("animals").unwrap();
        assert_eq!(store.get("animals"), None);
        assert!(store.get("cities").is_some());

        store.clear_all().unwrap();
        assert_eq!(store.get("cities"), None);
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::open(dir.path().join("progress.json")).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = ProgressStore::open(&path).unwrap();
        store.set("animals", 1, 3).unwrap();
        drop(store);

        let store = ProgressStore::open(&path).unwrap();
        assert_eq!(
            store.get("animals"),
            Some(PuzzleProgress {
                completed_parts: 1,
                total_parts: 3
            })
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ProgressStore::open(&path),
            Err(ProgressError::Json(_))
        ));
    }

    #[test]
    fn test_clear_missing_id_is_noop() {
        let mut store = ProgressStore::in_memory();
        store.clear("ghost").unwrap();
    }
}
