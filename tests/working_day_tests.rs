mod common;

use common::d;
use staffclock::core::calculator::working_days::calculate_working_days;
use std::collections::BTreeSet;

fn weekdays() -> BTreeSet<u32> {
    [1, 2, 3, 4, 5].into_iter().collect()
}

#[test]
fn test_full_week() {
    // 2026-06-01 is a Monday
    let days = calculate_working_days(
        d("2026-06-01"),
        d("2026-06-05"),
        false,
        false,
        &weekdays(),
        &BTreeSet::new(),
    );
    assert_eq!(days, 5.0);
}

#[test]
fn test_single_half_day() {
    let days = calculate_working_days(
        d("2026-06-01"),
        d("2026-06-01"),
        true,
        false,
        &weekdays(),
        &BTreeSet::new(),
    );
    assert_eq!(days, 0.5);
}

#[test]
fn test_weekend_only_range() {
    // Saturday..Sunday
    let days = calculate_working_days(
        d("2026-06-06"),
        d("2026-06-07"),
        false,
        false,
        &weekdays(),
        &BTreeSet::new(),
    );
    assert_eq!(days, 0.0);
}

#[test]
fn test_inverted_range_is_zero() {
    let days = calculate_working_days(
        d("2026-06-05"),
        d("2026-06-01"),
        false,
        false,
        &weekdays(),
        &BTreeSet::new(),
    );
    assert_eq!(days, 0.0);
}

#[test]
fn test_half_days_on_both_ends() {
    let days = calculate_working_days(
        d("2026-06-01"),
        d("2026-06-05"),
        true,
        true,
        &weekdays(),
        &BTreeSet::new(),
    );
    assert_eq!(days, 4.0);
}

#[test]
fn test_holiday_is_skipped() {
    let holidays: BTreeSet<_> = [d("2026-06-03")].into_iter().collect();
    let days = calculate_working_days(
        d("2026-06-01"),
        d("2026-06-05"),
        false,
        false,
        &weekdays(),
        &holidays,
    );
    assert_eq!(days, 4.0);
}

#[test]
fn test_range_spanning_weekend() {
    // Thu 2026-06-04 .. Mon 2026-06-08: Thu, Fri, Mon
    let days = calculate_working_days(
        d("2026-06-04"),
        d("2026-06-08"),
        false,
        false,
        &weekdays(),
        &BTreeSet::new(),
    );
    assert_eq!(days, 3.0);
}

#[test]
fn test_half_day_end_only_applies_to_multi_day_range() {
    // single day with only half_day_end set stays a full day
    let days = calculate_working_days(
        d("2026-06-01"),
        d("2026-06-01"),
        false,
        true,
        &weekdays(),
        &BTreeSet::new(),
    );
    assert_eq!(days, 1.0);
}

#[test]
fn test_custom_work_day_set() {
    // Saturday included for this employee
    let six_days: BTreeSet<u32> = [1, 2, 3, 4, 5, 6].into_iter().collect();
    let days = calculate_working_days(
        d("2026-06-01"),
        d("2026-06-07"),
        false,
        false,
        &six_days,
        &BTreeSet::new(),
    );
    assert_eq!(days, 6.0);
}
