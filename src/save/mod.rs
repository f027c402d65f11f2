//! Save snapshot and stores.
//!
//! A save is a flat record of the whole board: dimensions, per-cell
//! face/matched/face-up arrays, counters, and elapsed time. The coordinator
//! writes one after every successful match and clears it on completion.
//!
//! Two stores implement the [`SaveStore`] seam: [`MemoryStore`] (in-process
//! slot, the default) and [`FileStore`] (bincode-encoded file for the
//! frontend).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SaveError;

/// Flat snapshot of a game in progress.
///
/// Array lengths always equal `rows * cols`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub rows: usize,
    pub cols: usize,

    /// Per-cell face IDs, row-major.
    pub card_faces: Vec<u32>,
    /// Per-cell matched flags.
    pub matched: Vec<bool>,
    /// Per-cell face-up flags.
    pub face_up: Vec<bool>,

    pub turn_count: u32,
    pub found_pairs: u32,
    pub total_pairs: u32,

    /// Elapsed seconds at save time.
    pub saved_time: f32,
}

impl SaveSnapshot {
    /// Check the per-cell arrays against the recorded dimensions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let size = self.rows * self.cols;
        self.card_faces.len() == size
            && self.matched.len() == size
            && self.face_up.len() == size
    }
}

/// Where snapshots live. One slot; writes overwrite.
pub trait SaveStore {
    /// Persist a snapshot, replacing any prior one.
    fn write(&mut self, snapshot: &SaveSnapshot) -> Result<(), SaveError>;

    /// Read the stored snapshot, `None` when the slot is empty.
    fn read(&self) -> Result<Option<SaveSnapshot>, SaveError>;

    /// Empty the slot. Idempotent.
    fn clear(&mut self) -> Result<(), SaveError>;

    /// Is a snapshot present?
    fn has_save(&self) -> bool;
}

/// In-process single-slot store. Default for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Option<SaveSnapshot>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn write(&mut self, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        self.slot = Some(snapshot.clone());
        Ok(())
    }

    fn read(&self) -> Result<Option<SaveSnapshot>, SaveError> {
        Ok(self.slot.clone())
    }

    fn clear(&mut self) -> Result<(), SaveError> {
        self.slot = None;
        Ok(())
    }

    fn has_save(&self) -> bool {
        self.slot.is_some()
    }
}

/// File-backed store (bincode). Used by the terminal frontend.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store snapshots at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileStore {
    fn write(&mut self, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        let bytes = bincode::serialize(snapshot)?;
        std::fs::write(&self.path, bytes)?;
        log::info!("game saved to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<Option<SaveSnapshot>, SaveError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&self.path)?;
        let snapshot: SaveSnapshot = bincode::deserialize(&bytes)?;
        if !snapshot.is_consistent() {
            return Err(SaveError::Corrupted);
        }
        Ok(Some(snapshot))
    }

    fn clear(&mut self) -> Result<(), SaveError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn has_save(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> SaveSnapshot {
        SaveSnapshot {
            rows: 2,
            cols: 2,
            card_faces: vec![1, 0, 0, 1],
            matched: vec![false, true, true, false],
            face_up: vec![false, true, true, false],
            turn_count: 3,
            found_pairs: 1,
            total_pairs: 2,
            saved_time: 12.25,
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(!store.has_save());
        assert!(store.read().unwrap().is_none());

        let snap = sample_snapshot();
        store.write(&snap).unwrap();
        assert!(store.has_save());
        assert_eq!(store.read().unwrap(), Some(snap));
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemoryStore::new();
        let mut snap = sample_snapshot();

        store.write(&snap).unwrap();
        snap.turn_count = 9;
        store.write(&snap).unwrap();

        assert_eq!(store.read().unwrap().unwrap().turn_count, 9);
    }

    #[test]
    fn test_memory_store_clear_is_idempotent() {
        let mut store = MemoryStore::new();
        store.write(&sample_snapshot()).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.has_save());
    }

    #[test]
    fn test_snapshot_consistency() {
        let mut snap = sample_snapshot();
        assert!(snap.is_consistent());

        snap.matched.pop();
        assert!(!snap.is_consistent());
    }

    #[test]
    fn test_snapshot_serde_json() {
        let snap = sample_snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: SaveSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn test_snapshot_bincode() {
        let snap = sample_snapshot();
        let bytes = bincode::serialize(&snap).unwrap();
        let back: SaveSnapshot = bincode::deserialize(&bytes).unwrap();
        assert_eq!(snap, back);
    }
}
