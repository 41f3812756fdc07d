//! Bounded undo history.
//!
//! The stack holds whole-book snapshots taken just before each mutation.
//! Capacity is fixed at construction; when a checkpoint would exceed it, the
//! oldest snapshot is evicted first. `undo` pops the newest snapshot, so with
//! capacity N only the last N mutations can ever be rolled back.

use std::collections::VecDeque;

/// How many snapshots are kept when the config does not say otherwise.
pub const DEFAULT_UNDO_DEPTH: usize = 3;

#[derive(Debug)]
pub struct UndoStack<T> {
    snapshots: VecDeque<T>,
    capacity: usize,
}

impl<T> UndoStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a snapshot, evicting the oldest one when at capacity.
    pub fn checkpoint(&mut self, snapshot: T) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Takes back the most recent snapshot, or `None` when the history is
    /// exhausted.
    pub fn undo(&mut self) -> Option<T> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
