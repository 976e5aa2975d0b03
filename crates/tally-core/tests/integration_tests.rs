//! Integration tests driving full sessions through the public API

use tally_core::{DeltaSource, OperationKind, Session, TallyError};

/// Delta source replaying a scripted sequence, cycling when exhausted
struct ScriptedDeltas {
    deltas: Vec<i64>,
    next: usize,
}

impl ScriptedDeltas {
    fn new(deltas: Vec<i64>) -> Self {
        ScriptedDeltas { deltas, next: 0 }
    }
}

impl DeltaSource for ScriptedDeltas {
    fn next_delta(&mut self) -> i64 {
        let delta = self.deltas[self.next % self.deltas.len()];
        self.next += 1;
        delta
    }
}

#[test]
fn test_increment_double_undo_scenario() {
    // 5 -> increment -> 6 -> double -> 12 -> undo -> 6 -> undo -> 5 -> undo -> nothing
    let mut session = Session::new(5);
    assert_eq!(session.apply(OperationKind::Increment), 6);
    assert_eq!(session.apply(OperationKind::Double), 12);
    assert_eq!(session.undo(), Ok(6));
    assert_eq!(session.undo(), Ok(5));
    assert_eq!(session.undo(), Err(TallyError::NothingToUndo));
    assert_eq!(session.value(), 5);
}

#[test]
fn test_odd_double_undo_scenario() {
    // 7 -> double -> 14 -> undo -> 7
    let mut session = Session::new(7);
    assert_eq!(session.apply(OperationKind::Double), 14);
    assert_eq!(session.undo(), Ok(7));
}

#[test]
fn test_double_decrement_scenario() {
    // 3 -> decrement -> 2 -> decrement -> 1 -> undo -> 2 -> undo -> 3
    let mut session = Session::new(3);
    assert_eq!(session.apply(OperationKind::Decrement), 2);
    assert_eq!(session.apply(OperationKind::Decrement), 1);
    assert_eq!(session.undo(), Ok(2));
    assert_eq!(session.undo(), Ok(3));
}

#[test]
fn test_random_add_round_trip_for_every_delta() {
    for delta in 1..=9 {
        let mut session = Session::with_delta_source(50, Box::new(ScriptedDeltas::new(vec![delta])));
        assert_eq!(session.apply(OperationKind::RandomAdd), 50 + delta);
        assert_eq!(session.undo(), Ok(50));
    }
}

#[test]
fn test_selector_driven_session() {
    // The shell hands raw selectors to the parser; exercise the same path.
    let mut session = Session::new(0);
    for selector in ["1", "increment", "3", "2"] {
        let kind: OperationKind = selector.parse().expect("valid selector");
        session.apply(kind);
    }
    // 0 -> 1 -> 2 -> 4 -> 3
    assert_eq!(session.value(), 3);
    assert_eq!(session.history_len(), 4);

    assert!(matches!(
        "sideways".parse::<OperationKind>(),
        Err(TallyError::UnknownOperation(_))
    ));
}

#[test]
fn test_mixed_workload_history_accounting() {
    let mut session = Session::with_delta_source(10, Box::new(ScriptedDeltas::new(vec![4])));
    session.apply(OperationKind::Increment);
    session.apply(OperationKind::RandomAdd);
    session.apply(OperationKind::Double);
    assert_eq!(session.history_len(), 3);

    session.undo().unwrap();
    assert_eq!(session.history_len(), 2);
    assert_eq!(session.value(), 15);

    session.apply(OperationKind::Decrement);
    assert_eq!(session.history_len(), 3);
    assert_eq!(session.value(), 14);
}

#[test]
fn test_undo_failure_is_not_sticky() {
    let mut session = Session::new(1);
    assert_eq!(session.undo(), Err(TallyError::NothingToUndo));
    assert_eq!(session.apply(OperationKind::Increment), 2);
    assert_eq!(session.undo(), Ok(1));
}
