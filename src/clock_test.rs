use super::*;

#[test]
fn system_clock_is_past_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.now_ms() > 1_577_836_800_000.0);
}

#[test]
fn utc_hours_minutes_at_epoch_is_midnight() {
    assert_eq!(utc_hours_minutes(0.0), (0, 0));
}

#[test]
fn utc_hours_minutes_wraps_days() {
    // 1 day + 13:07:59.999
    let ts = 86_400_000.0 + 13.0 * 3_600_000.0 + 7.0 * 60_000.0 + 59_999.0;
    assert_eq!(utc_hours_minutes(ts), (13, 7));
}

#[test]
fn utc_hours_minutes_clamps_negative() {
    assert_eq!(utc_hours_minutes(-5_000.0), (0, 0));
}

#[test]
fn format_hh_mm_zero_pads() {
    assert_eq!(format_hh_mm(9, 5), "09:05");
    assert_eq!(format_hh_mm(23, 59), "23:59");
}

#[cfg(not(feature = "csr"))]
#[test]
fn format_time_renders_utc_outside_browser() {
    let ts = 8.0 * 3_600_000.0 + 30.0 * 60_000.0;
    assert_eq!(format_time(ts), "08:30");
}
