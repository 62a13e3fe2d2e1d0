//! Bounded, newest-first log of recent conversions.
//!
//! Session scoped: nothing is persisted. The log is a plain value owned by
//! the caller; `record` is its only mutator.


use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::debug;

use crate::converter::ConversionResult;
use crate::settings::settings;

/// Upper bound on the number of entries any log keeps.
pub const MAX_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Monotonic within one log; derived from the creation time in ms.
    pub id: u64,
    pub original: String,
    pub converted: String,
    /// Unix epoch milliseconds.
    pub created_at: u64,
    pub rule_set: String,
}

#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    min_record_chars: usize,
    last_id: u64,
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Empty log sized from settings (`[history]`).
    pub fn new() -> Self {
        let s = settings();
        Self::with_limits(s.history.capacity, s.history.min_record_chars)
    }

    /// `capacity` is clamped to `1..=MAX_CAPACITY`.
    pub fn with_limits(capacity: usize, min_record_chars: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            min_record_chars,
            last_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// `0` is the newest entry.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Prepend `entry`, evicting the oldest entries beyond capacity.
    /// No deduplication.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.last_id = self.last_id.max(entry.id);
        self.entries.push_front(entry);
        let evicted = self.entries.len().saturating_sub(self.capacity);
        self.entries.truncate(self.capacity);
        debug!(len = self.entries.len(), evicted, "history record");
    }

    /// Whether an input is long enough to be worth remembering.
    pub fn accepts(&self, original: &str) -> bool {
        original.trim().chars().count() > self.min_record_chars
    }

    /// Record a finished conversion if its input passes [`accepts`](Self::accepts).
    ///
    /// `now_ms` should be obtained from [`now_millis()`]. The id is
    /// `now_ms`, bumped past the previous id when the clock has not advanced.
    pub fn record_conversion(
        &mut self,
        result: &ConversionResult,
        now_ms: u64,
    ) -> Option<&HistoryEntry> {
        if !self.accepts(&result.original) {
            return None;
        }
        let id = now_ms.max(self.last_id + 1);
        self.record(HistoryEntry {
            id,
            original: result.original.clone(),
            converted: result.converted.clone(),
            created_at: now_ms,
            rule_set: result.rule_set.clone(),
        });
        self.entries.front()
    }
}
