//! Fixed-capacity ring of retained log files
//!
//! Tracks the paths of the last N files created by the writer and evicts
//! the oldest one from disk when its slot is reused.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Fixed-capacity FIFO record of the log files currently kept on disk.
///
/// Each slot holds the path of one retained file. Recording a new path into
/// an occupied slot deletes the old file first, so at most `capacity` files
/// created by this process exist at any time (modulo reported eviction
/// failures). Eviction order is strictly insertion order.
#[derive(Debug)]
pub struct RotationRing {
    slots: Vec<Option<PathBuf>>,
    cursor: usize,
}

impl RotationRing {
    /// Create a ring retaining at most `capacity` files (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            cursor: 0,
        }
    }

    /// Record `new_path` in the current slot, evicting the slot's previous
    /// occupant from disk.
    ///
    /// The slot is overwritten and the cursor advances even when the
    /// deletion fails; the error is returned so the caller can report it.
    pub fn record_and_evict(&mut self, new_path: PathBuf) -> io::Result<()> {
        let eviction = match self.slots[self.cursor].take() {
            Some(stale) => fs::remove_file(&stale),
            None => Ok(()),
        };
        self.slots[self.cursor] = Some(new_path);
        self.cursor = (self.cursor + 1) % self.slots.len();
        eviction
    }
}
