//! Working-day counting for leave requests.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Count the working days in [start, end] inclusive.
///
/// A day counts only if its weekday (1 = Monday … 7 = Sunday) is in
/// `work_days` and it is not a holiday. Counted days contribute 1.0,
/// except half-day boundaries which contribute 0.5:
/// - a single-day request with `half_day_start` counts 0.5
/// - otherwise the first day with `half_day_start`, and the last day
///   (when start != end) with `half_day_end`, count 0.5 each.
///
/// Returns 0 when start > end.
pub fn calculate_working_days(
    start: NaiveDate,
    end: NaiveDate,
    half_day_start: bool,
    half_day_end: bool,
    work_days: &BTreeSet<u32>,
    holidays: &BTreeSet<NaiveDate>,
) -> f64 {
    if start > end {
        return 0.0;
    }

    let mut total = 0.0;
    let mut day = start;

    loop {
        let weekday = day.weekday().number_from_monday();
        if work_days.contains(&weekday) && !holidays.contains(&day) {
            let contribution = if start == end && half_day_start {
                0.5
            } else if day == start && half_day_start {
                0.5
            } else if day == end && start != end && half_day_end {
                0.5
            } else {
                1.0
            };
            total += contribution;
        }

        if day == end {
            break;
        }
        day = match day.succ_opt() {
            Some(d) => d,
            None => break,
        };
    }

    total
}
