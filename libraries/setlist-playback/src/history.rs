//! Play history tracking
//!
//! Keeps a bounded record of what was played. The record is for display only;
//! navigation never reads from it.

use crate::types::{Entry, DEFAULT_HISTORY_SIZE};
use std::collections::VecDeque;

/// Bounded history of played entries
///
/// Ring buffer that discards the oldest entry once full. Entries are stored as
/// copies, so later edits to the playlist do not rewrite what was played.
#[derive(Debug, Clone)]
pub struct History {
    /// Played entries (most recent = back)
    entries: VecDeque<Entry>,

    /// Maximum history size
    capacity: usize,
}

impl History {
    /// Create new history with specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a play
    ///
    /// If history is full, the oldest entry is discarded first
    pub fn record(&mut self, entry: Entry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Most recent play
    pub fn most_recent(&self) -> Option<&Entry> {
        self.entries.back()
    }

    /// Played entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.title.as_str()).collect()
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
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
