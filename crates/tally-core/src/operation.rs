//! The reversible operation set

use crate::error::TallyError;
use crate::store::ValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector for an operation, before any reversal data exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    /// Add one to the value
    Increment,
    /// Subtract one from the value
    Decrement,
    /// Double the value
    Double,
    /// Add a random amount between 1 and 9
    RandomAdd,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Increment => write!(f, "increment"),
            OperationKind::Decrement => write!(f, "decrement"),
            OperationKind::Double => write!(f, "double"),
            OperationKind::RandomAdd => write!(f, "randadd"),
        }
    }
}

impl FromStr for OperationKind {
    type Err = TallyError;

    /// Parse a selector: the operation name or its menu code, case-insensitive.
    /// `randadd` also answers to `random`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "increment" => Ok(OperationKind::Increment),
            "2" | "decrement" => Ok(OperationKind::Decrement),
            "3" | "double" => Ok(OperationKind::Double),
            "4" | "randadd" | "random" => Ok(OperationKind::RandomAdd),
            other => Err(TallyError::unknown_operation(other)),
        }
    }
}

/// An applied (or applicable) operation, carrying the data its reversal needs.
///
/// Only `RandomAdd` needs reversal data: the delta drawn at apply time, so
/// undo subtracts exactly that amount and never a fresh draw. The other
/// variants reverse with a fixed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Adds one; reversed by subtracting one
    Increment,
    /// Subtracts one; reversed by adding one
    Decrement,
    /// Doubles; reversed by truncating halving.
    ///
    /// The reversal is exact for the immediately-preceding apply unless the
    /// doubling wrapped. An odd value reaching `reverse` (only possible by
    /// misuse outside the one-undo-per-apply protocol) loses its low bit;
    /// this mirrors the documented behavior, it is not guarded against.
    Double,
    /// Adds the recorded delta; reversed by subtracting it
    RandomAdd {
        /// The amount drawn at apply time, in `1..=9`
        delta: i64,
    },
}

impl Operation {
    /// The selector this operation answers to
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Increment => OperationKind::Increment,
            Operation::Decrement => OperationKind::Decrement,
            Operation::Double => OperationKind::Double,
            Operation::RandomAdd { .. } => OperationKind::RandomAdd,
        }
    }

    /// Mutate the store forward
    pub fn apply(&self, store: &mut ValueStore) {
        let v = store.get();
        let next = match self {
            Operation::Increment => v.wrapping_add(1),
            Operation::Decrement => v.wrapping_sub(1),
            Operation::Double => v.wrapping_mul(2),
            Operation::RandomAdd { delta } => v.wrapping_add(*delta),
        };
        store.set(next);
    }

    /// Mutate the store back, assuming this operation is the most recent apply
    pub fn reverse(&self, store: &mut ValueStore) {
        let v = store.get();
        let prev = match self {
            Operation::Increment => v.wrapping_sub(1),
            Operation::Decrement => v.wrapping_add(1),
            Operation::Double => v / 2,
            Operation::RandomAdd { delta } => v.wrapping_sub(*delta),
        };
        store.set(prev);
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::RandomAdd { delta } => write!(f, "randadd (+{})", delta),
            other => write!(f, "{}", other.kind()),
        }
    }
}
