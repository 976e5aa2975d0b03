#![warn(missing_docs)]

//! Undoable arithmetic over a shared integer for tally
//!
//! Provides the value store, the reversible operation set, the history stack,
//! and the session object that ties them together for single-step undo.

pub mod error;
pub mod history;
pub mod operation;
pub mod rng;
pub mod session;
pub mod store;

// Re-export public API
pub use error::TallyError;
pub use history::{History, HistoryEntry};
pub use operation::{Operation, OperationKind};
pub use rng::{DeltaSource, ThreadDeltaSource};
pub use session::Session;
pub use store::ValueStore;
