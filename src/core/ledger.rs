//! Clock-event ledger: append-only event log plus the state machine that
//! guards it.
//!
//! The live state of an employee is always derived from the most recent
//! event, never stored on its own, so it can never diverge from the log.
//! CLOCKED_OUT → CLOCKED_IN → ON_BREAK → CLOCKED_IN → CLOCKED_OUT.

use crate::config::Config;
use crate::core::accounting::recalculate;
use crate::core::calculator::minutes::calculate_minutes;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::clock_state::ClockState;
use crate::models::event_source::EventSource;
use crate::models::event_type::EventType;
use crate::models::status_snapshot::StatusSnapshot;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::Connection;

/// Derive the current state from the latest event in the ledger.
pub fn current_state(conn: &Connection, employee_id: i64) -> AppResult<ClockState> {
    let last = queries::last_event(conn, employee_id)?;
    Ok(ClockState::from_last_event(last.map(|e| e.kind)))
}

/// Transition guard. Any call from the wrong state is a Conflict that
/// names the illegal move.
fn validate_transition(state: ClockState, kind: EventType) -> AppResult<()> {
    let ok = matches!(
        (state, kind),
        (ClockState::ClockedOut, EventType::ClockIn)
            | (ClockState::ClockedIn, EventType::ClockOut)
            | (ClockState::ClockedIn, EventType::BreakStart)
            | (ClockState::OnBreak, EventType::BreakEnd)
    );

    if ok {
        return Ok(());
    }

    let msg = match (kind, state) {
        (EventType::ClockIn, ClockState::ClockedIn) => {
            "cannot clock in: already clocked in".to_string()
        }
        (EventType::ClockIn, ClockState::OnBreak) => {
            "cannot clock in: currently on break".to_string()
        }
        (EventType::ClockOut, ClockState::ClockedOut) => {
            "cannot clock out: not clocked in".to_string()
        }
        (EventType::ClockOut, ClockState::OnBreak) => {
            "cannot clock out: end the break first".to_string()
        }
        (EventType::BreakStart, s) => {
            format!("cannot start a break while {}", s.label())
        }
        (EventType::BreakEnd, s) => {
            format!("cannot end a break while {}", s.label())
        }
        // legal pairs returned above
        (k, s) => format!("illegal {} while {}", k.label(), s.label()),
    };

    Err(AppError::Conflict(msg))
}

/// Append one clock event after validating the transition.
///
/// Runs as a single transaction: validation, append and (for clock-out)
/// the summary recompute either all commit or none do.
pub fn record_event(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: i64,
    kind: EventType,
    source: EventSource,
    terminal_id: Option<String>,
    notes: Option<String>,
    now: NaiveDateTime,
) -> AppResult<ClockEvent> {
    let tx = pool.conn.transaction()?;

    queries::get_employee(&tx, employee_id)?;

    let state = current_state(&tx, employee_id)?;
    validate_transition(state, kind)?;

    let mut ev = ClockEvent::new(
        employee_id,
        now.date(),
        now.time(),
        kind,
        source,
        terminal_id,
        notes,
    );
    ev.id = queries::insert_event(&tx, &ev)?;

    // a closed day is immediately re-booked
    if kind == EventType::ClockOut {
        recalculate(&tx, cfg, employee_id, ev.date)?;
    }

    ttlog(
        &tx,
        kind.to_db_str(),
        &format!("employee {employee_id}"),
        &format!("{} at {}", kind.label(), ev.get_date_time()),
    )?;

    tx.commit()?;
    Ok(ev)
}

/// Live status: today's events plus `now` as the open-interval end fed
/// into the minute calculator. The only place an unclosed interval
/// contributes a duration.
pub fn current_status(
    pool: &mut DbPool,
    employee_id: i64,
    now: NaiveDateTime,
) -> AppResult<StatusSnapshot> {
    queries::get_employee(&pool.conn, employee_id)?;

    let state = current_state(&pool.conn, employee_id)?;
    let today = now.date();
    let events = queries::load_events_by_date(&pool.conn, employee_id, &today)?;

    let totals = calculate_minutes(&events, Some(now));

    let elapsed_work = totals
        .open_work_since
        .map(|s| (now - s).num_minutes().max(0))
        .unwrap_or(0);
    let elapsed_break = totals
        .open_break_since
        .map(|s| (now - s).num_minutes().max(0))
        .unwrap_or(0);

    Ok(StatusSnapshot {
        employee_id,
        state,
        clocked_in_since: totals.open_work_since,
        break_started_at: totals.open_break_since,
        elapsed_work_minutes: elapsed_work,
        elapsed_break_minutes: elapsed_break,
        today_work_minutes: totals.work_minutes,
        today_break_minutes: totals.break_minutes,
    })
}

// ---------------------------------------------------------------------
// Administrative corrections
// ---------------------------------------------------------------------
// These bypass transition validation (a manager may insert or alter any
// event) but always recompute the affected day(s) and record the acting
// manager on the event.

pub fn add_manual_entry(
    pool: &mut DbPool,
    cfg: &Config,
    manager_id: i64,
    employee_id: i64,
    date: NaiveDate,
    time: NaiveTime,
    kind: EventType,
    notes: Option<String>,
) -> AppResult<ClockEvent> {
    let tx = pool.conn.transaction()?;

    queries::get_employee(&tx, manager_id)?;
    queries::get_employee(&tx, employee_id)?;

    let mut ev = ClockEvent::manual(employee_id, date, time, kind, manager_id, notes);
    ev.id = queries::insert_event(&tx, &ev)?;

    recalculate(&tx, cfg, employee_id, date)?;

    ttlog(
        &tx,
        "manual_add",
        &format!("employee {employee_id}"),
        &format!(
            "manager {} inserted {} at {}",
            manager_id,
            kind.label(),
            ev.get_date_time()
        ),
    )?;

    tx.commit()?;
    Ok(ev)
}

#[allow(clippy::too_many_arguments)]
pub fn edit_entry(
    pool: &mut DbPool,
    cfg: &Config,
    manager_id: i64,
    event_id: i64,
    new_date: Option<NaiveDate>,
    new_time: Option<NaiveTime>,
    new_kind: Option<EventType>,
    new_notes: Option<String>,
) -> AppResult<ClockEvent> {
    let tx = pool.conn.transaction()?;

    queries::get_employee(&tx, manager_id)?;

    let mut ev = queries::get_event(&tx, event_id)?;
    let old_date = ev.date;

    if let Some(d) = new_date {
        ev.date = d;
    }
    if let Some(t) = new_time {
        ev.time = t;
    }
    if let Some(k) = new_kind {
        ev.kind = k;
    }
    if let Some(n) = new_notes {
        ev.notes = Some(n);
    }
    ev.is_modified = true;
    ev.modified_by = Some(manager_id);

    queries::update_event(&tx, &ev)?;

    // moving an event across days dirties both
    recalculate(&tx, cfg, ev.employee_id, old_date)?;
    if ev.date != old_date {
        recalculate(&tx, cfg, ev.employee_id, ev.date)?;
    }

    ttlog(
        &tx,
        "manual_edit",
        &format!("event {event_id}"),
        &format!("manager {} edited event {}", manager_id, event_id),
    )?;

    tx.commit()?;
    Ok(ev)
}

pub fn delete_entry(
    pool: &mut DbPool,
    cfg: &Config,
    manager_id: i64,
    event_id: i64,
) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    queries::get_employee(&tx, manager_id)?;

    let ev = queries::get_event(&tx, event_id)?;
    queries::delete_event(&tx, event_id)?;

    recalculate(&tx, cfg, ev.employee_id, ev.date)?;

    ttlog(
        &tx,
        "manual_delete",
        &format!("event {event_id}"),
        &format!("manager {} deleted event {}", manager_id, event_id),
    )?;

    tx.commit()?;
    Ok(())
}
