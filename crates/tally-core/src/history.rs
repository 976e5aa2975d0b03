//! History management for single-step undo

use crate::error::TallyError;
use crate::operation::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single entry in the operation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The applied operation, with its reversal data
    pub operation: Operation,
    /// Position in the history
    pub index: usize,
    /// When the operation was applied
    pub applied_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new history entry stamped with the current time
    pub fn new(operation: Operation, index: usize) -> Self {
        HistoryEntry {
            operation,
            index,
            applied_at: Utc::now(),
        }
    }
}

/// Last-in-first-out record of applied operations.
///
/// Grows only through [`record`](History::record) and shrinks only through
/// [`pop`](History::pop); popping and reversing entries in order walks the
/// store back through its prior values in reverse chronological order.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Record an already-applied operation
    pub fn record(&mut self, operation: Operation) {
        let index = self.entries.len();
        self.entries.push(HistoryEntry::new(operation, index));
    }

    /// Remove and return the most recently recorded operation
    pub fn pop(&mut self) -> Result<Operation, TallyError> {
        self.entries
            .pop()
            .map(|entry| entry.operation)
            .ok_or(TallyError::NothingToUndo)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of operations currently undoable
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no operations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
