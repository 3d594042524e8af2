//! Bounded undo history.
//!
//! The engine pushes a full `GameState` snapshot before every mutation.
//! When the stack is full the oldest snapshot is dropped, so undo depth is
//! capped at `capacity` steps. Snapshots are independent values: the roster
//! is a persistent vector, so pushing is O(1) and later mutation of the live
//! state cannot alter a stored entry.

use std::collections::VecDeque;

use crate::core::GameState;

/// Stack of snapshots with FIFO eviction past `capacity`.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<GameState>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Store a snapshot, evicting the oldest one if full.
    pub fn push(&mut self, snapshot: GameState) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(20)
    }
}
