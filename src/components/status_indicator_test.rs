use super::*;

#[test]
fn connection_dot_class_reflects_state() {
    assert_eq!(connection_dot_class(true), "status-dot status-dot--connected");
    assert_eq!(connection_dot_class(false), "status-dot status-dot--disconnected");
}

#[test]
fn title_absent_before_first_check() {
    assert_eq!(last_checked_title("Last checked", None), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn title_shows_time_of_last_check() {
    let ts = 14.0 * 3_600_000.0 + 5.0 * 60_000.0;
    assert_eq!(last_checked_title("Last checked", Some(ts)).as_deref(), Some("Last checked 14:05"));
}
