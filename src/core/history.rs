//! Log of step entries.
//!
//! Every step change (and every refresh of the current step that opened a new
//! step) is recorded as a [`StepEntry`], giving views and diagnostics the path
//! the user actually took.

use super::StepIndex;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepEntry {
    /// Step the user was on before the entry
    pub from: StepIndex,
    /// Step that was entered
    pub to: StepIndex,
    /// When the entry happened
    pub timestamp: DateTime<Utc>,
}

impl StepEntry {
    /// Whether this entry re-entered the step the user was already on.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of step entries.
///
/// History is immutable: [`record`](Self::record) returns a new history with
/// the entry appended.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StepEntry, StepHistory};
/// use chrono::Utc;
///
/// let history = StepHistory::new()
///     .record(StepEntry { from: 0, to: 1, timestamp: Utc::now() })
///     .record(StepEntry { from: 1, to: 2, timestamp: Utc::now() });
///
/// assert_eq!(history.path(), vec![0, 1, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepHistory {
    entries: Vec<StepEntry>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    pub fn record(&self, entry: StepEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Append an entry in place.
    pub(crate) fn push(&mut self, entry: StepEntry) {
        self.entries.push(entry);
    }

    /// Steps traversed in order: the origin of the first entry, then the
    /// target of each entry.
    pub fn path(&self) -> Vec<StepIndex> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.first() {
            path.push(first.from);
        }
        path.extend(self.entries.iter().map(|entry| entry.to));
        path
    }

    /// Time between the first and last recorded entry.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn entries(&self) -> &[StepEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
