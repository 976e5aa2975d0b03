//! The shared value store

use serde::{Deserialize, Serialize};

/// Holds the single mutable integer that operations act on.
///
/// Any `i64` is accepted; there is no validation. Arithmetic on the stored
/// value uses two's-complement wraparound (`wrapping_*`), so operations are
/// total and never panic on overflow. A wrapped result is still exactly
/// reversible for Increment, Decrement and RandomAdd; see
/// [`Operation::Double`](crate::Operation) for the one lossy case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueStore {
    value: i64,
}

impl ValueStore {
    /// Create a store holding the given initial value
    pub fn new(value: i64) -> Self {
        ValueStore { value }
    }

    /// Read the current value
    pub fn get(&self) -> i64 {
        self.value
    }

    /// Overwrite the current value
    pub fn set(&mut self, value: i64) {
        self.value = value;
    }
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_get_set() {
        let mut store = ValueStore::new(5);
        assert_eq!(store.get(), 5);
        store.set(-3);
        assert_eq!(store.get(), -3);
    }

    #[test]
    fn test_store_accepts_extremes() {
        let mut store = ValueStore::default();
        store.set(i64::MAX);
        assert_eq!(store.get(), i64::MAX);
        store.set(i64::MIN);
        assert_eq!(store.get(), i64::MIN);
    }
}
