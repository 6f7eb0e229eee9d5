//! Snapshot-based undo/redo history.
//!
//! Each committed action stores a full copy of the scene. The index points
//! at the snapshot matching the current scene; recording a new snapshot
//! after an undo discards the redo branch.

use std::collections::VecDeque;

use crate::scene::SceneSnapshot;

/// One recorded state and the action that produced it.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub label: String,
    pub snapshot: SceneSnapshot,
}

/// Linear snapshot history with bounded capacity.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: VecDeque<HistoryEntry>,
    index: usize,
    capacity: usize,
}

impl HistoryManager {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record a snapshot as the new present.
    pub fn record(&mut self, label: impl Into<String>, snapshot: SceneSnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push_back(HistoryEntry {
            label: label.into(),
            snapshot,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back and return the snapshot to restore.
    pub fn undo(&mut self) -> Option<&SceneSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).map(|e| &e.snapshot)
    }

    /// Step forward and return the snapshot to restore.
    pub fn redo(&mut self) -> Option<&SceneSnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).map(|e| &e.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Label of the action an undo would revert.
    pub fn undo_label(&self) -> Option<&str> {
        if self.can_undo() {
            self.entries.get(self.index).map(|e| e.label.as_str())
        } else {
            None
        }
    }

    /// Label of the action a redo would re-apply.
    pub fn redo_label(&self) -> Option<&str> {
        if self.can_redo() {
            self.entries.get(self.index + 1).map(|e| e.label.as_str())
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<&SceneSnapshot> {
        self.entries.get(self.index).map(|e| &e.snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(floorplan_core::constants::HISTORY_CAPACITY)
    }
}
