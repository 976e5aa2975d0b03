//! Error types for the tally core

use thiserror::Error;

/// Errors that can occur when driving a session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    /// History is empty, there is nothing to undo
    #[error("nothing to undo")]
    NothingToUndo,

    /// Operation selector was not recognized
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl TallyError {
    /// Create a new UnknownOperation error with the offending selector
    pub fn unknown_operation(selector: impl Into<String>) -> Self {
        Self::UnknownOperation(selector.into())
    }
}
