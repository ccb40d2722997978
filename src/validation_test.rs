use super::*;

const MAX: usize = 500;
const WARN: usize = 450;

#[test]
fn empty_and_whitespace_are_invalid() {
    assert!(!validate("", MAX, WARN).valid);
    assert!(!validate("   \n\t ", MAX, WARN).valid);
}

#[test]
fn short_text_is_valid_and_not_near_limit() {
    let v = validate("  Hello  ", MAX, WARN);
    assert_eq!(v.len, 5);
    assert!(v.valid);
    assert!(!v.near_limit);
}

#[test]
fn limit_boundaries() {
    assert!(validate(&"a".repeat(500), MAX, WARN).valid);
    assert!(!validate(&"a".repeat(501), MAX, WARN).valid);
}

#[test]
fn near_limit_starts_above_warning_threshold() {
    assert!(!validate(&"a".repeat(450), MAX, WARN).near_limit);
    assert!(validate(&"a".repeat(451), MAX, WARN).near_limit);
    // Over the limit is still flagged near-limit.
    assert!(validate(&"a".repeat(600), MAX, WARN).near_limit);
}

#[test]
fn length_counts_characters_not_bytes() {
    // Cyrillic letters are two bytes each in UTF-8.
    let text = "ж".repeat(500);
    assert_eq!(text.len(), 1000);
    let v = validate(&text, MAX, WARN);
    assert_eq!(v.len, 500);
    assert!(v.valid);
}

#[test]
fn surrounding_whitespace_does_not_count() {
    let text = format!("   {}   ", "a".repeat(500));
    assert!(validate(&text, MAX, WARN).valid);
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    let v = validate("\u{FEFF}", MAX, WARN);
    assert_eq!(v.len, 0);
    assert!(!v.valid);
    assert_eq!(trim_input("\u{FEFF} hi \u{FEFF}"), "hi");
}

#[test]
fn can_send_requires_valid_and_idle() {
    let v = validate("hi", MAX, WARN);
    assert!(v.can_send(false));
    assert!(!v.can_send(true));
    assert!(!validate("", MAX, WARN).can_send(false));
}

#[test]
fn input_rows_grows_with_lines_and_caps() {
    assert_eq!(input_rows("", 5), 1);
    assert_eq!(input_rows("one", 5), 1);
    assert_eq!(input_rows("one\ntwo\nthree", 5), 3);
    assert_eq!(input_rows("1\n2\n3\n4\n5\n6\n7", 5), 5);
}

#[test]
fn input_rows_zero_max_still_shows_one_row() {
    assert_eq!(input_rows("a\nb", 0), 1);
}
