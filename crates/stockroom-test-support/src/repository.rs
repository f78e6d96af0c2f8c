//! Mock `SnapshotRepository` implementations for tests.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use stockroom_core::error::PersistenceError;
use stockroom_core::repository::{Snapshot, SnapshotRepository};

/// An in-memory repository that keeps every saved snapshot. `load` returns the
/// most recent save, or the seed it was created with.
#[derive(Debug, Default)]
pub struct RecordingSnapshotRepository {
    seed: Option<Snapshot>,
    saved: Mutex<Vec<Snapshot>>,
}

impl RecordingSnapshotRepository {
    /// Creates a repository with nothing stored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose first `load` returns `snapshot`.
    #[must_use]
    pub fn seeded(snapshot: Snapshot) -> Self {
        Self {
            seed: Some(snapshot),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Returns every snapshot saved so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_snapshots(&self) -> Vec<Snapshot> {
        self.saved.lock().unwrap().clone()
    }

    /// Returns the number of saves performed.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    /// Returns the most recent save, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn last_saved(&self) -> Option<Snapshot> {
        self.saved.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SnapshotRepository for RecordingSnapshotRepository {
    async fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        Ok(self.last_saved().or_else(|| self.seed.clone()))
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        self.saved.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}

/// A repository with nothing stored that silently discards saves.
#[derive(Debug)]
pub struct EmptySnapshotRepository;

#[async_trait]
impl SnapshotRepository for EmptySnapshotRepository {
    async fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        Ok(None)
    }

    async fn save(&self, _snapshot: &Snapshot) -> Result<(), PersistenceError> {
        Ok(())
    }
}

/// A repository whose every call fails with an I/O error.
#[derive(Debug)]
pub struct FailingSnapshotRepository;

fn disk_failure() -> PersistenceError {
    PersistenceError::Io {
        path: PathBuf::from("/unavailable/inventory.json"),
        source: std::io::Error::other("disk unavailable"),
    }
}

#[async_trait]
impl SnapshotRepository for FailingSnapshotRepository {
    async fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        Err(disk_failure())
    }

    async fn save(&self, _snapshot: &Snapshot) -> Result<(), PersistenceError> {
        Err(disk_failure())
    }
}

/// A repository that reports its stored snapshot as corrupt but accepts saves.
#[derive(Debug)]
pub struct CorruptSnapshotRepository;

#[async_trait]
impl SnapshotRepository for CorruptSnapshotRepository {
    async fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        Err(PersistenceError::Corrupt("expected value at line 1 column 1".into()))
    }

    async fn save(&self, _snapshot: &Snapshot) -> Result<(), PersistenceError> {
        Ok(())
    }
}
