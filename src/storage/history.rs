//! Bounded calculation history.
//!
//! Entries are kept most-recent-first. Once the log is full the oldest entry
//! is evicted on every append.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of entries retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Marker whose presence in a result keeps the entry out of the log.
const ERROR_MARKER: &str = "Error";

/// One `(expression, result)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What was computed, e.g. `3 + 5` or `sin(30)`.
    pub expression: String,

    /// Rendered result, e.g. `8`.
    pub result: String,
}

impl HistoryEntry {
    /// Creates a history entry.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Most-recent-first log capped at a fixed length.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Creates an empty log holding at most `limit` entries.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Records an entry unless the result carries the error marker.
    ///
    /// Returns `true` when the entry was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraccalc::storage::History;
    ///
    /// let mut history = History::with_limit(2);
    /// assert!(history.append("1 + 1", "2"));
    /// assert!(!history.append("5 / 0", "Error"));
    /// assert_eq!(history.len(), 1);
    /// ```
    pub fn append(&mut self, expression: impl Into<String>, result: impl Into<String>) -> bool {
        let entry = HistoryEntry::new(expression, result);
        if entry.result.contains(ERROR_MARKER) {
            tracing::trace!(expression = %entry.expression, "error result not recorded");
            return false;
        }
        tracing::debug!(expression = %entry.expression, result = %entry.result, "history appended");
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
        true
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates entries most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut history = History::default();
        history.append("1 + 1", "2");
        history.append("2 + 2", "4");
        let expressions: Vec<_> = history.iter().map(|e| e.expression.as_str()).collect();
        assert_eq!(expressions, ["2 + 2", "1 + 1"]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut history = History::with_limit(3);
        for i in 0..5 {
            history.append(format!("op {i}"), i.to_string());
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.iter().next().unwrap().expression, "op 4");
        assert_eq!(history.iter().last().unwrap().expression, "op 2");
    }

    #[test]
    fn errors_are_skipped() {
        let mut history = History::default();
        assert!(!history.append("Matrix A + Matrix B", "Matrix Error: Size mismatch for add"));
        assert!(history.append("Mean", "No Data"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn entries_serialize_as_records() {
        let entry = HistoryEntry::new("3 + 5", "8");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"expression":"3 + 5","result":"8"}"#);
        assert_eq!(entry.to_string(), "3 + 5 = 8");
    }
}
