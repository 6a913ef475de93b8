mod common;

use staffclock::core::compliance::{
    BREAK_REQUIRED_AFTER_MINUTES, MAX_DAILY_WORK_MINUTES, check_compliance,
};

#[test]
fn test_short_day_is_compliant() {
    let v = check_compliance(300, 0);
    assert!(v.is_compliant);
    assert!(v.notes_joined().is_none());
}

#[test]
fn test_exactly_six_hours_needs_no_break() {
    let v = check_compliance(BREAK_REQUIRED_AFTER_MINUTES, 0);
    assert!(v.is_compliant);
}

#[test]
fn test_long_day_without_break() {
    let v = check_compliance(480, 0);
    assert!(!v.is_compliant);
    assert_eq!(v.notes.len(), 1);
    assert!(v.notes[0].contains("30 min"));
}

#[test]
fn test_long_day_with_sufficient_break() {
    let v = check_compliance(480, 30);
    assert!(v.is_compliant);
}

#[test]
fn test_very_long_day_needs_longer_break() {
    // 9.5h worked with only a 30 min break
    let v = check_compliance(570, 30);
    assert!(!v.is_compliant);
    assert_eq!(v.notes.len(), 1);
    assert!(v.notes[0].contains("45 min"));
}

#[test]
fn test_over_maximum_daily_work() {
    let v = check_compliance(MAX_DAILY_WORK_MINUTES + 30, 60);
    assert!(!v.is_compliant);
    assert!(v.notes.iter().any(|n| n.contains("maximum")));
}

#[test]
fn test_multiple_violations_joined() {
    // 11h straight with no break at all: all three rules fire
    let v = check_compliance(660, 0);
    assert!(!v.is_compliant);
    assert_eq!(v.notes.len(), 3);

    let joined = v.notes_joined().unwrap();
    assert_eq!(joined.matches("; ").count(), 2);
}
