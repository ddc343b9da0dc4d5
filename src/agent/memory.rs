//! Append-only experience log for agents
//!
//! Entries are never evicted or reordered, so insertion order doubles as
//! recency order: the most recent entry is always the last one.

use crate::types::MemoryEntry;

/// Default number of entries returned by [`MemoryLog::relevant`]
pub const DEFAULT_RELEVANT_LIMIT: usize = 5;

/// Experience log
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    entries: Vec<MemoryEntry>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, entry: MemoryEntry) {
        self.entries.push(entry);
    }

    /// Get reference to all entries, oldest first
    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// Get the last N entries, oldest first
    pub fn last_n(&self, n: usize) -> &[MemoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Get the most recent entry
    pub fn last(&self) -> Option<&MemoryEntry> {
        self.entries.last()
    }

    /// Entries whose data or outcome mentions `context` (case-insensitive),
    /// most recent first, at most `limit` of them
    pub fn relevant(&self, context: &str, limit: usize) -> Vec<&MemoryEntry> {
        let needle = context.to_lowercase();
        self.entries
            .iter()
            .rev()
            .filter(|entry| entry.mentions(&needle))
            .take(limit)
            .collect()
    }

    /// Count total entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
