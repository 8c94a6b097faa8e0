//! Session history of successful calculations.
//!
//! Append-only and in memory: entries are kept in insertion order for the
//! life of the session and never modified or removed.

use crate::{HistoryEntry, HistoryOrder};

/// Ordered log of past calculations
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the end. No deduplication, no capacity limit.
    pub fn append(&mut self, entry: HistoryEntry) {
        tracing::info!(
            "Recorded BMI {} for {} ({} entries)",
            entry.bmi,
            entry.name,
            self.entries.len() + 1
        );
        self.entries.push(entry);
    }

    /// Owned copy of the current contents, oldest first
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries in the requested display order
    pub fn ordered(&self, order: HistoryOrder) -> Vec<&HistoryEntry> {
        match order {
            HistoryOrder::OldestFirst => self.iter().collect(),
            HistoryOrder::NewestFirst => self.iter().rev().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
