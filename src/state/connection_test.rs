use super::*;

#[test]
fn connection_state_default_disconnected() {
    let state = ConnectionState::default();
    assert!(!state.connected);
    assert!(state.last_checked.is_none());
}

#[test]
fn observe_reports_transitions() {
    let mut state = ConnectionState::default();
    assert!(state.observe(true, 1.0));
    assert!(!state.observe(true, 2.0));
    assert!(state.observe(false, 3.0));
    assert_eq!(state.last_checked, Some(3.0));
}

#[test]
fn observe_last_write_wins() {
    let mut state = ConnectionState::default();
    state.observe(true, 5.0);
    state.observe(false, 4.0);
    assert!(!state.connected);
    assert_eq!(state.last_checked, Some(4.0));
}
