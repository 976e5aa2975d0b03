//! Session object tying store, history and randomness together

use crate::error::TallyError;
use crate::history::{History, HistoryEntry};
use crate::operation::{Operation, OperationKind};
use crate::rng::{DeltaSource, ThreadDeltaSource};
use crate::store::ValueStore;
use tracing::debug;

/// One independent undoable-value session.
///
/// Owns the value store and the history stack, so multiple sessions coexist
/// without shared state. A session is confined to one execution context;
/// apply mutates the store and records onto history as a single unit, which
/// is what keeps the undo invariant intact.
pub struct Session {
    store: ValueStore,
    history: History,
    deltas: Box<dyn DeltaSource + Send>,
}

impl Session {
    /// Create a session starting at the given value, drawing random deltas
    /// from the thread-local generator
    pub fn new(initial: i64) -> Self {
        Self::with_delta_source(initial, Box::new(ThreadDeltaSource))
    }

    /// Create a session with an injected delta source, for deterministic
    /// random-add behavior in tests
    pub fn with_delta_source(initial: i64, deltas: Box<dyn DeltaSource + Send>) -> Self {
        Session {
            store: ValueStore::new(initial),
            history: History::new(),
            deltas,
        }
    }

    /// Apply the selected operation and return the new value.
    ///
    /// For random-add the delta is drawn here and recorded inside the
    /// operation, so the draw is observable only through the returned value.
    /// Never fails; every operation is applicable to every store value.
    pub fn apply(&mut self, kind: OperationKind) -> i64 {
        let operation = match kind {
            OperationKind::Increment => Operation::Increment,
            OperationKind::Decrement => Operation::Decrement,
            OperationKind::Double => Operation::Double,
            OperationKind::RandomAdd => Operation::RandomAdd {
                delta: self.deltas.next_delta(),
            },
        };

        operation.apply(&mut self.store);
        self.history.record(operation);

        let value = self.store.get();
        debug!(%operation, value, "applied operation");
        value
    }

    /// Undo the most recent operation and return the restored value.
    ///
    /// Returns [`TallyError::NothingToUndo`] when the history is empty; the
    /// store is left untouched in that case.
    pub fn undo(&mut self) -> Result<i64, TallyError> {
        let operation = self.history.pop()?;
        operation.reverse(&mut self.store);

        let value = self.store.get();
        debug!(%operation, value, "undid operation");
        Ok(value)
    }

    /// The current store value
    pub fn value(&self) -> i64 {
        self.store.get()
    }

    /// Number of operations currently undoable
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The applied operations still on the history stack, oldest first
    pub fn history_entries(&self) -> &[HistoryEntry] {
        self.history.entries()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
