//! Daily accounting: turn one day's events into a persisted summary row.

use crate::config::Config;
use crate::core::calculator::minutes::calculate_minutes;
use crate::core::compliance::check_compliance;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::models::daily_summary::DailySummary;
use crate::models::timesheet::Timesheet;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Pure assembly of a summary from a day's events and the employee's
/// daily target. No open-end time: unmatched intervals contribute zero.
pub fn build_summary(
    employee_id: i64,
    date: NaiveDate,
    events: &[ClockEvent],
    daily_target_minutes: i64,
) -> DailySummary {
    let totals = calculate_minutes(events, None);
    let overtime = (totals.work_minutes - daily_target_minutes).max(0);
    let verdict = check_compliance(totals.work_minutes, totals.break_minutes);

    DailySummary {
        id: 0,
        employee_id,
        date,
        work_minutes: totals.work_minutes,
        break_minutes: totals.break_minutes,
        overtime_minutes: overtime,
        is_compliant: verdict.is_compliant,
        compliance_notes: verdict.notes_joined(),
    }
}

/// Recompute and persist the summary for one employee/day.
///
/// Idempotent: overwrites every derived field of the row, creating it if
/// missing. Called after clock-out and after any administrative mutation
/// of that day's events; safe to re-run any number of times.
pub fn recalculate(
    conn: &Connection,
    cfg: &Config,
    employee_id: i64,
    date: NaiveDate,
) -> AppResult<DailySummary> {
    let employee = queries::get_employee(conn, employee_id)?;
    let events = queries::load_events_by_date(conn, employee_id, &date)?;

    let summary = build_summary(
        employee_id,
        date,
        &events,
        employee.effective_daily_target(cfg),
    );
    queries::upsert_summary(conn, &summary)?;

    Ok(summary)
}

/// Fetch the stored summary, computing (and persisting) it when absent.
pub fn get_daily_summary(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: i64,
    date: NaiveDate,
) -> AppResult<DailySummary> {
    queries::get_employee(&pool.conn, employee_id)?;

    if let Some(s) = queries::get_summary(&pool.conn, employee_id, &date)? {
        return Ok(s);
    }

    let tx = pool.conn.transaction()?;
    let summary = recalculate(&tx, cfg, employee_id, date)?;
    tx.commit()?;
    Ok(summary)
}

/// Reporting bundle over a date range: summaries, raw entries, totals.
pub fn get_timesheet(
    pool: &mut DbPool,
    _cfg: &Config,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Timesheet> {
    if end < start {
        return Err(crate::errors::AppError::Validation(format!(
            "range end {} is before start {}",
            end, start
        )));
    }

    queries::get_employee(&pool.conn, employee_id)?;

    let summaries = queries::load_summaries_between(&pool.conn, employee_id, &start, &end)?;
    let entries = queries::load_events_between(&pool.conn, employee_id, &start, &end)?;

    Ok(Timesheet::from_parts(employee_id, summaries, entries))
}
