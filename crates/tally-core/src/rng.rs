//! Pluggable randomness for the random-add operation

use rand::Rng;

/// Source of the delta drawn by random-add.
///
/// Implementations must return values in `1..=9`. The seam exists so tests
/// can script the draws instead of reaching for an ambient generator.
pub trait DeltaSource {
    /// Draw the next delta, in `1..=9`
    fn next_delta(&mut self) -> i64;
}

/// Production source backed by the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDeltaSource;

impl DeltaSource for ThreadDeltaSource {
    fn next_delta(&mut self) -> i64 {
        rand::thread_rng().gen_range(1..=9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_source_stays_in_range() {
        let mut source = ThreadDeltaSource;
        for _ in 0..1000 {
            let delta = source.next_delta();
            assert!((1..=9).contains(&delta), "delta {} out of range", delta);
        }
    }
}
