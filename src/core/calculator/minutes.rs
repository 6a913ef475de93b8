//! Minute aggregation over one day's clock events.
//!
//! Single left-to-right pass: CLOCK_IN pairs with the next CLOCK_OUT,
//! BREAK_START with the next BREAK_END. A repeated open event (two
//! CLOCK_INs with no CLOCK_OUT between them) silently replaces the
//! earlier open interval; that interval's time is lost. This leniency is
//! inherited behavior and must not be tightened without sign-off.

use crate::models::clock_event::ClockEvent;
use crate::models::event_type::EventType;
use chrono::NaiveDateTime;

#[derive(Debug, Default, Clone, Copy)]
pub struct MinuteTotals {
    pub work_minutes: i64,
    pub break_minutes: i64,
    /// Start of the still-open work interval, if any.
    pub open_work_since: Option<NaiveDateTime>,
    /// Start of the still-open break interval, if any.
    pub open_break_since: Option<NaiveDateTime>,
}

/// Aggregate work and break minutes for one day.
///
/// `open_end` closes any unmatched trailing interval; it is supplied only
/// by the live-status path. When absent (persisted summaries) an open
/// interval contributes zero: a day is only booked once properly closed.
pub fn calculate_minutes(events: &[ClockEvent], open_end: Option<NaiveDateTime>) -> MinuteTotals {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| (e.timestamp(), e.id));

    let mut totals = MinuteTotals::default();
    let mut open_work: Option<NaiveDateTime> = None;
    let mut open_break: Option<NaiveDateTime> = None;

    for ev in &sorted {
        let ts = ev.timestamp();
        match ev.kind {
            EventType::ClockIn => {
                // a second IN discards the earlier open interval
                open_work = Some(ts);
            }
            EventType::ClockOut => {
                if let Some(start) = open_work.take() {
                    totals.work_minutes += (ts - start).num_minutes().max(0);
                }
            }
            EventType::BreakStart => {
                open_break = Some(ts);
            }
            EventType::BreakEnd => {
                if let Some(start) = open_break.take() {
                    totals.break_minutes += (ts - start).num_minutes().max(0);
                }
            }
        }
    }

    if let Some(now) = open_end {
        if let Some(start) = open_work {
            totals.work_minutes += (now - start).num_minutes().max(0);
        }
        if let Some(start) = open_break {
            totals.break_minutes += (now - start).num_minutes().max(0);
        }
    }

    totals.open_work_since = open_work;
    totals.open_break_since = open_break;
    totals
}
