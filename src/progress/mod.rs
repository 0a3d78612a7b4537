//! Persisted set of solved algorithm ids
//!
//! The set is loaded once at startup and written back after every mutation.
//! Storage problems never reach the caller: an absent or unreadable record
//! loads as the empty set, and a failed save is logged and otherwise ignored.

mod storage;

pub use storage::{default_data_dir, FileStorage, MemoryStorage, ProgressRecord, ProgressStorage};

use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fixed storage name of the progress record
pub const STORAGE_NAME: &str = "algoscope-progress";

/// Errors from progress storage
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage directory is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Solved-id set backed by a [`ProgressStorage`]
pub struct ProgressTracker {
    solved: BTreeSet<String>,
    storage: Box<dyn ProgressStorage>,
}

impl std::fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("solved", &self.solved)
            .finish_non_exhaustive()
    }
}

impl ProgressTracker {
    /// Load the solved set from `storage`, falling back to empty
    pub fn load(storage: Box<dyn ProgressStorage>) -> Self {
        let solved = match storage.load() {
            Ok(Some(record)) => {
                let solved: BTreeSet<String> = record.solved.into_iter().collect();
                info!(count = solved.len(), "progress loaded");
                solved
            }
            Ok(None) => {
                debug!("no saved progress, starting empty");
                BTreeSet::new()
            }
            Err(e) => {
                warn!(error = %e, "saved progress unreadable, starting empty");
                BTreeSet::new()
            }
        };
        ProgressTracker { solved, storage }
    }

    /// In-memory tracker that persists nowhere
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStorage::new()))
    }

    /// Flip `id` between solved and unsolved; returns whether it is now solved
    pub fn toggle(&mut self, id: &str) -> bool {
        let solved = if self.solved.remove(id) {
            false
        } else {
            self.solved.insert(id.to_string());
            true
        };
        debug!(id, solved, "progress toggled");
        self.persist();
        solved
    }

    pub fn clear(&mut self) {
        self.solved.clear();
        info!("progress cleared");
        self.persist();
    }

    pub fn is_solved(&self, id: &str) -> bool {
        self.solved.contains(id)
    }

    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    /// Solved ids in sorted order
    pub fn solved_ids(&self) -> impl Iterator<Item = &str> {
        self.solved.iter().map(String::as_str)
    }

    pub fn solved(&self) -> &BTreeSet<String> {
        &self.solved
    }

    fn persist(&self) {
        let record = ProgressRecord {
            solved: self.solved.iter().cloned().collect(),
        };
        if let Err(e) = self.storage.save(&record) {
            warn!(error = %e, "failed to save progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut tracker = ProgressTracker::in_memory();
        tracker.toggle("a");
        let before = tracker.solved().clone();

        assert!(tracker.toggle("b"));
        assert_eq!(tracker.solved_count(), before.len() + 1);
        assert!(!tracker.toggle("b"));
        assert_eq!(tracker.solved(), &before);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut tracker = ProgressTracker::in_memory();
        tracker.toggle("x");
        tracker.toggle("y");
        tracker.toggle("x");
        tracker.toggle("x");
        assert_eq!(tracker.solved_ids().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_clear() {
        let mut tracker = ProgressTracker::in_memory();
        tracker.toggle("x");
        tracker.clear();
        assert_eq!(tracker.solved_count(), 0);
    }

    #[test]
    fn test_duplicates_in_record_collapse() {
        let storage = MemoryStorage::with_record(ProgressRecord {
            solved: vec!["a".into(), "a".into(), "b".into()],
        });
        let tracker = ProgressTracker::load(Box::new(storage));
        assert_eq!(tracker.solved_count(), 2);
    }

    #[test]
    fn test_mutations_are_saved() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        let mut tracker = ProgressTracker::load(Box::new(storage));
        tracker.toggle("two-sum");
        assert_eq!(
            handle.snapshot().map(|r| r.solved),
            Some(vec!["two-sum".to_string()])
        );
    }
}
