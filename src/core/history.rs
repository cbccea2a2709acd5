//! Calculation history tracking.
//!
//! Provides immutable tracking of completed calculations over time,
//! following functional programming principles.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single completed calculation.
///
/// Timestamps are kept at millisecond precision, the precision the
/// persistence format stores.
///
/// # Example
///
/// ```rust
/// use dentaku::core::HistoryEntry;
///
/// let entry = HistoryEntry::now("5 + 3", "8");
/// assert_eq!(entry.expression, "5 + 3");
/// assert_eq!(entry.result, "8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// `previous symbol current`, e.g. `12 × 3`
    pub expression: String,
    /// Formatted result as displayed
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: timestamp.trunc_subsecs(3),
        }
    }

    /// Entry stamped with the current time.
    pub fn now(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self::new(expression, result, Utc::now())
    }
}

/// Ordered history of calculations, oldest first.
///
/// History is immutable - the `record` method returns a new history
/// with the entry appended.
///
/// # Example
///
/// ```rust
/// use dentaku::core::{History, HistoryEntry};
///
/// let history = History::new();
/// let history = history.record(HistoryEntry::now("1 + 1", "2"));
/// let history = history.record(HistoryEntry::now("2 × 3", "6"));
///
/// let newest: Vec<_> = history.newest_first().map(|e| e.result.as_str()).collect();
/// assert_eq!(newest, ["6", "2"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild a history from entries in chronological order.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Record an entry, returning a new history.
    ///
    /// This is a pure function - the existing history is left untouched.
    ///
    /// ```rust
    /// use dentaku::core::{History, HistoryEntry};
    ///
    /// let history = History::new();
    /// let new_history = history.record(HistoryEntry::now("4 ÷ 2", "2"));
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Append an entry to an owned history without copying it.
    pub fn push(mut self, entry: HistoryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries in display order, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
