use std::collections::VecDeque;

use crate::buffer::{PixelBuffer, Snapshot};

/// Number of snapshots kept before the oldest ones are dropped
pub const HISTORY_CAPACITY: usize = 50;

/// Bounded history of buffer snapshots for undo.
///
/// The cursor points at the snapshot matching the live buffer. There is no
/// redo: committing after an undo throws away everything past the cursor.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<Snapshot>,
    cursor: usize,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl HistoryStore {
    /// Creates an empty history holding at most `capacity` snapshots (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Records the current state of `buffer`.
    pub fn commit(&mut self, buffer: &PixelBuffer) {
        if !self.entries.is_empty() {
            // Drop the branch that was undone
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(buffer.snapshot());

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            log::debug!("History full, evicted oldest snapshot");
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Steps back one entry and returns the snapshot to restore, if any.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
