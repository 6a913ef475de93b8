use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::daily_summary::DailySummary;
use crate::models::employee::{Employee, parse_work_days, work_days_to_db};
use crate::models::event_source::EventSource;
use crate::models::event_type::EventType;
use crate::models::leave_balance::LeaveBalance;
use crate::models::leave_category::LeaveCategory;
use crate::models::leave_request::LeaveRequest;
use crate::models::leave_status::LeaveStatus;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------

fn parse_date_col(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

fn parse_time_col(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}

pub fn map_event_row(row: &Row) -> Result<ClockEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    let source_str: String = row.get("source")?;
    let source = EventSource::from_db_str(&source_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventSource(source_str.clone())),
        )
    })?;

    Ok(ClockEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date: parse_date_col(&date_str)?,
        time: parse_time_col(&time_str)?,
        kind,
        source,
        terminal_id: row.get("terminal_id")?,
        notes: row.get("notes")?,
        is_modified: row.get::<_, i64>("is_modified")? == 1,
        modified_by: row.get("modified_by")?,
        created_at: row.get("created_at")?,
    })
}

fn map_summary_row(row: &Row) -> Result<DailySummary> {
    let date_str: String = row.get("date")?;
    Ok(DailySummary {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date: parse_date_col(&date_str)?,
        work_minutes: row.get("work_minutes")?,
        break_minutes: row.get("break_minutes")?,
        overtime_minutes: row.get("overtime_minutes")?,
        is_compliant: row.get::<_, i64>("is_compliant")? == 1,
        compliance_notes: row.get("compliance_notes")?,
    })
}

fn map_employee_row(row: &Row) -> Result<Employee> {
    let work_days: Option<String> = row.get("work_days")?;
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        daily_target_minutes: row.get("daily_target_minutes")?,
        work_days: work_days.map(|s| parse_work_days(&s)),
        annual_leave_days: row.get("annual_leave_days")?,
        max_carry_over: row.get("max_carry_over")?,
        manager_id: row.get("manager_id")?,
    })
}

fn map_balance_row(row: &Row) -> Result<LeaveBalance> {
    Ok(LeaveBalance {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        year: row.get("year")?,
        total_days: row.get("total_days")?,
        used_days: row.get("used_days")?,
        carried_over_days: row.get("carried_over_days")?,
    })
}

fn map_request_row(row: &Row) -> Result<LeaveRequest> {
    let cat_str: String = row.get("category")?;
    let category = LeaveCategory::from_db_str(&cat_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidLeaveCategory(cat_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = LeaveStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidLeaveStatus(status_str.clone())),
        )
    })?;

    let start_str: String = row.get("start_date")?;
    let end_str: String = row.get("end_date")?;

    Ok(LeaveRequest {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        category,
        start_date: parse_date_col(&start_str)?,
        end_date: parse_date_col(&end_str)?,
        half_day_start: row.get::<_, i64>("half_day_start")? == 1,
        half_day_end: row.get::<_, i64>("half_day_end")? == 1,
        total_days: row.get("total_days")?,
        status,
        approver_id: row.get("approver_id")?,
        rejection_reason: row.get("rejection_reason")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------
// Employees (directory)
// ---------------------------------------------------------------------

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, daily_target_minutes, work_days, annual_leave_days, max_carry_over, manager_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            emp.name,
            emp.daily_target_minutes,
            emp.work_days.as_ref().map(work_days_to_db),
            emp.annual_leave_days,
            emp.max_carry_over,
            emp.manager_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Existence check for every operation that takes an employee id.
pub fn get_employee(conn: &Connection, id: i64) -> AppResult<Employee> {
    conn.prepare("SELECT * FROM employees WHERE id = ?1")?
        .query_row([id], map_employee_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("employee {id}")))
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_employee(conn: &Connection, emp: &Employee) -> AppResult<()> {
    conn.execute(
        "UPDATE employees
         SET name = ?1, daily_target_minutes = ?2, work_days = ?3,
             annual_leave_days = ?4, max_carry_over = ?5, manager_id = ?6
         WHERE id = ?7",
        params![
            emp.name,
            emp.daily_target_minutes,
            emp.work_days.as_ref().map(work_days_to_db),
            emp.annual_leave_days,
            emp.max_carry_over,
            emp.manager_id,
            emp.id,
        ],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------
// Holidays (calendar)
// ---------------------------------------------------------------------

pub fn insert_holiday(conn: &Connection, date: &NaiveDate, name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO holidays (date, name) VALUES (?1, ?2)",
        params![date.format("%Y-%m-%d").to_string(), name],
    )?;
    Ok(())
}

pub fn load_holidays(conn: &Connection) -> AppResult<BTreeSet<NaiveDate>> {
    let mut stmt = conn.prepare("SELECT date FROM holidays")?;
    let rows = stmt.query_map([], |row| {
        let s: String = row.get(0)?;
        parse_date_col(&s)
    })?;

    let mut out = BTreeSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

pub fn list_holidays(conn: &Connection) -> AppResult<Vec<(NaiveDate, String)>> {
    let mut stmt = conn.prepare("SELECT date, name FROM holidays ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| {
        let s: String = row.get(0)?;
        Ok((parse_date_col(&s)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Clock events (ledger)
// ---------------------------------------------------------------------

pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO clock_events (employee_id, date, time, kind, source, terminal_id, notes, is_modified, modified_by, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            ev.employee_id,
            ev.date_str(),
            ev.time_str(),
            ev.kind.to_db_str(),
            ev.source.to_db_str(),
            ev.terminal_id,
            ev.notes,
            if ev.is_modified { 1 } else { 0 },
            ev.modified_by,
            ev.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_event(conn: &Connection, ev: &ClockEvent) -> AppResult<()> {
    conn.execute(
        "UPDATE clock_events
         SET date = ?1, time = ?2, kind = ?3, source = ?4,
             terminal_id = ?5, notes = ?6, is_modified = ?7, modified_by = ?8
         WHERE id = ?9",
        params![
            ev.date_str(),
            ev.time_str(),
            ev.kind.to_db_str(),
            ev.source.to_db_str(),
            ev.terminal_id,
            ev.notes,
            if ev.is_modified { 1 } else { 0 },
            ev.modified_by,
            ev.id,
        ],
    )?;
    Ok(())
}

pub fn get_event(conn: &Connection, id: i64) -> AppResult<ClockEvent> {
    conn.prepare("SELECT * FROM clock_events WHERE id = ?1")?
        .query_row([id], map_event_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("clock event {id}")))
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM clock_events WHERE id = ?1", [id])?;
    Ok(())
}

pub fn load_events_by_date(
    conn: &Connection,
    employee_id: i64,
    date: &NaiveDate,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM clock_events
         WHERE employee_id = ?1 AND date = ?2
         ORDER BY time ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![employee_id, date.format("%Y-%m-%d").to_string()],
        map_event_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_events_between(
    conn: &Connection,
    employee_id: i64,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM clock_events
         WHERE employee_id = ?1 AND date >= ?2 AND date <= ?3
         ORDER BY date ASC, time ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_event_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The most recent event across all days; the live state is derived from
/// this row alone.
pub fn last_event(conn: &Connection, employee_id: i64) -> AppResult<Option<ClockEvent>> {
    let ev = conn
        .prepare(
            "SELECT * FROM clock_events
             WHERE employee_id = ?1
             ORDER BY date DESC, time DESC, id DESC
             LIMIT 1",
        )?
        .query_row([employee_id], map_event_row)
        .optional()?;
    Ok(ev)
}

// ---------------------------------------------------------------------
// Daily summaries (derived cache)
// ---------------------------------------------------------------------

pub fn upsert_summary(conn: &Connection, s: &DailySummary) -> AppResult<()> {
    conn.execute(
        "INSERT INTO daily_summaries
             (employee_id, date, work_minutes, break_minutes, overtime_minutes, is_compliant, compliance_notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(employee_id, date) DO UPDATE SET
             work_minutes = excluded.work_minutes,
             break_minutes = excluded.break_minutes,
             overtime_minutes = excluded.overtime_minutes,
             is_compliant = excluded.is_compliant,
             compliance_notes = excluded.compliance_notes",
        params![
            s.employee_id,
            s.date_str(),
            s.work_minutes,
            s.break_minutes,
            s.overtime_minutes,
            if s.is_compliant { 1 } else { 0 },
            s.compliance_notes,
        ],
    )?;
    Ok(())
}

pub fn get_summary(
    conn: &Connection,
    employee_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<DailySummary>> {
    let s = conn
        .prepare("SELECT * FROM daily_summaries WHERE employee_id = ?1 AND date = ?2")?
        .query_row(
            params![employee_id, date.format("%Y-%m-%d").to_string()],
            map_summary_row,
        )
        .optional()?;
    Ok(s)
}

pub fn load_summaries_between(
    conn: &Connection,
    employee_id: i64,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<DailySummary>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM daily_summaries
         WHERE employee_id = ?1 AND date >= ?2 AND date <= ?3
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_summary_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Leave balances
// ---------------------------------------------------------------------

pub fn get_balance_row(
    conn: &Connection,
    employee_id: i64,
    year: i32,
) -> AppResult<Option<LeaveBalance>> {
    let b = conn
        .prepare("SELECT * FROM leave_balances WHERE employee_id = ?1 AND year = ?2")?
        .query_row(params![employee_id, year], map_balance_row)
        .optional()?;
    Ok(b)
}

pub fn insert_balance(conn: &Connection, b: &LeaveBalance) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO leave_balances (employee_id, year, total_days, used_days, carried_over_days)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            b.employee_id,
            b.year,
            b.total_days,
            b.used_days,
            b.carried_over_days
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_balance(conn: &Connection, b: &LeaveBalance) -> AppResult<()> {
    conn.execute(
        "UPDATE leave_balances
         SET total_days = ?1, used_days = ?2, carried_over_days = ?3
         WHERE id = ?4",
        params![b.total_days, b.used_days, b.carried_over_days, b.id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------
// Leave requests
// ---------------------------------------------------------------------

pub fn insert_request(conn: &Connection, r: &LeaveRequest) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO leave_requests
             (employee_id, category, start_date, end_date, half_day_start, half_day_end,
              total_days, status, approver_id, rejection_reason, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            r.employee_id,
            r.category.to_db_str(),
            r.start_date.format("%Y-%m-%d").to_string(),
            r.end_date.format("%Y-%m-%d").to_string(),
            if r.half_day_start { 1 } else { 0 },
            if r.half_day_end { 1 } else { 0 },
            r.total_days,
            r.status.to_db_str(),
            r.approver_id,
            r.rejection_reason,
            r.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_request(conn: &Connection, r: &LeaveRequest) -> AppResult<()> {
    conn.execute(
        "UPDATE leave_requests
         SET start_date = ?1, end_date = ?2, half_day_start = ?3, half_day_end = ?4,
             total_days = ?5, status = ?6, approver_id = ?7, rejection_reason = ?8
         WHERE id = ?9",
        params![
            r.start_date.format("%Y-%m-%d").to_string(),
            r.end_date.format("%Y-%m-%d").to_string(),
            if r.half_day_start { 1 } else { 0 },
            if r.half_day_end { 1 } else { 0 },
            r.total_days,
            r.status.to_db_str(),
            r.approver_id,
            r.rejection_reason,
            r.id,
        ],
    )?;
    Ok(())
}

pub fn get_request(conn: &Connection, id: i64) -> AppResult<LeaveRequest> {
    conn.prepare("SELECT * FROM leave_requests WHERE id = ?1")?
        .query_row([id], map_request_row)
        .optional()?
        .ok_or_else(|| AppError::NotFound(format!("leave request {id}")))
}

pub fn list_requests(conn: &Connection, employee_id: i64) -> AppResult<Vec<LeaveRequest>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM leave_requests
         WHERE employee_id = ?1
         ORDER BY start_date ASC, id ASC",
    )?;

    let rows = stmt.query_map([employee_id], map_request_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Same-category requests of the same employee still in a non-terminal
/// state whose date range intersects [start, end]. Cross-category overlap
/// is deliberately not checked.
pub fn find_overlapping_requests(
    conn: &Connection,
    employee_id: i64,
    category: LeaveCategory,
    start: &NaiveDate,
    end: &NaiveDate,
    exclude_id: Option<i64>,
) -> AppResult<Vec<LeaveRequest>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM leave_requests
         WHERE employee_id = ?1
           AND category = ?2
           AND status IN ('pending','approved')
           AND start_date <= ?3
           AND end_date >= ?4
           AND id != ?5
         ORDER BY start_date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            category.to_db_str(),
            end.format("%Y-%m-%d").to_string(),
            start.format("%Y-%m-%d").to_string(),
            exclude_id.unwrap_or(0),
        ],
        map_request_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
