//! Leave engine: request lifecycle, yearly balances and carry-over.

use crate::config::Config;
use crate::core::calculator::working_days::calculate_working_days;
use crate::core::conflict::ensure_no_overlap;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::leave_balance::LeaveBalance;
use crate::models::leave_category::LeaveCategory;
use crate::models::leave_request::LeaveRequest;
use crate::models::leave_status::LeaveStatus;
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;

// ---------------------------------------------------------------------
// Balances
// ---------------------------------------------------------------------

/// Carry-over from the previous year's balance: nothing when the
/// remainder is zero or negative, otherwise capped at the employee's
/// configured maximum.
pub fn carry_over_for(
    conn: &Connection,
    cfg: &Config,
    employee_id: i64,
    year: i32,
) -> AppResult<f64> {
    let previous = queries::get_balance_row(conn, employee_id, year - 1)?;

    let Some(prev) = previous else {
        return Ok(0.0);
    };

    let remaining = prev.signed_remaining();
    if remaining <= 0.0 {
        return Ok(0.0);
    }

    let employee = queries::get_employee(conn, employee_id)?;
    Ok(remaining.min(employee.effective_max_carry_over(cfg)))
}

/// Fetch the (employee, year) balance row, creating it lazily with the
/// configured entitlement and the computed carry-over.
pub fn get_or_create_balance(
    conn: &Connection,
    cfg: &Config,
    employee_id: i64,
    year: i32,
) -> AppResult<LeaveBalance> {
    if let Some(b) = queries::get_balance_row(conn, employee_id, year)? {
        return Ok(b);
    }

    let employee = queries::get_employee(conn, employee_id)?;
    let carried = carry_over_for(conn, cfg, employee_id, year)?;

    let mut balance = LeaveBalance {
        id: 0,
        employee_id,
        year,
        total_days: employee.effective_annual_leave_days(cfg),
        used_days: 0.0,
        carried_over_days: carried,
    };
    balance.id = queries::insert_balance(conn, &balance)?;

    Ok(balance)
}

pub fn get_balance(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: i64,
    year: i32,
) -> AppResult<LeaveBalance> {
    let tx = pool.conn.transaction()?;
    let balance = get_or_create_balance(&tx, cfg, employee_id, year)?;
    tx.commit()?;
    Ok(balance)
}

/// Administrative correction of any subset of the balance fields.
pub fn set_balance(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: i64,
    year: i32,
    total_days: Option<f64>,
    used_days: Option<f64>,
    carried_over_days: Option<f64>,
) -> AppResult<LeaveBalance> {
    let tx = pool.conn.transaction()?;

    let mut balance = get_or_create_balance(&tx, cfg, employee_id, year)?;

    if let Some(t) = total_days {
        if t < 0.0 {
            return Err(AppError::Validation("total_days must not be negative".into()));
        }
        balance.total_days = t;
    }
    if let Some(u) = used_days {
        if u < 0.0 {
            return Err(AppError::Validation("used_days must not be negative".into()));
        }
        balance.used_days = u;
    }
    if let Some(c) = carried_over_days {
        if c < 0.0 {
            return Err(AppError::Validation(
                "carried_over_days must not be negative".into(),
            ));
        }
        balance.carried_over_days = c;
    }

    queries::update_balance(&tx, &balance)?;

    ttlog(
        &tx,
        "balance_set",
        &format!("employee {employee_id}/{year}"),
        &format!(
            "balance corrected: total={} used={} carried={}",
            balance.total_days, balance.used_days, balance.carried_over_days
        ),
    )?;

    tx.commit()?;
    Ok(balance)
}

/// Forced recompute of `carried_over_days` only, leaving totals and used
/// days untouched. The lazy get-or-create path never overwrites an
/// existing row; this explicit trigger does.
pub fn trigger_carry_over(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: i64,
    year: i32,
) -> AppResult<LeaveBalance> {
    let tx = pool.conn.transaction()?;

    let mut balance = get_or_create_balance(&tx, cfg, employee_id, year)?;
    balance.carried_over_days = carry_over_for(&tx, cfg, employee_id, year)?;
    queries::update_balance(&tx, &balance)?;

    ttlog(
        &tx,
        "carry_over",
        &format!("employee {employee_id}/{year}"),
        &format!("carry-over recomputed: {}", balance.carried_over_days),
    )?;

    tx.commit()?;
    Ok(balance)
}

// ---------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------

/// Recompute the working-day cost of a request from the employee's
/// work-day set and the holiday calendar. Never trusted from the caller.
fn request_days(
    conn: &Connection,
    cfg: &Config,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    half_day_start: bool,
    half_day_end: bool,
) -> AppResult<f64> {
    let employee = queries::get_employee(conn, employee_id)?;
    let holidays = queries::load_holidays(conn)?;

    Ok(calculate_working_days(
        start,
        end,
        half_day_start,
        half_day_end,
        &employee.effective_work_days(cfg),
        &holidays,
    ))
}

pub fn create_request(
    pool: &mut DbPool,
    cfg: &Config,
    employee_id: i64,
    category: LeaveCategory,
    start: NaiveDate,
    end: NaiveDate,
    half_day_start: bool,
    half_day_end: bool,
) -> AppResult<LeaveRequest> {
    if end < start {
        return Err(AppError::Validation(format!(
            "end date {} is before start date {}",
            end, start
        )));
    }

    let tx = pool.conn.transaction()?;

    let total_days = request_days(&tx, cfg, employee_id, start, end, half_day_start, half_day_end)?;
    ensure_no_overlap(&tx, employee_id, category, start, end, None)?;

    let mut request = LeaveRequest::new(
        employee_id,
        category,
        start,
        end,
        half_day_start,
        half_day_end,
        total_days,
    );
    request.id = queries::insert_request(&tx, &request)?;

    ttlog(
        &tx,
        "leave_create",
        &format!("request {}", request.id),
        &format!(
            "{} {}..{} ({} days) for employee {}",
            category.label(),
            start,
            end,
            total_days,
            employee_id
        ),
    )?;

    tx.commit()?;
    Ok(request)
}

/// Edit a still-pending request in place. Days are recomputed and the
/// overlap check re-run with the request itself excluded.
#[allow(clippy::too_many_arguments)]
pub fn update_request(
    pool: &mut DbPool,
    cfg: &Config,
    request_id: i64,
    actor_id: i64,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    half_day_start: Option<bool>,
    half_day_end: Option<bool>,
) -> AppResult<LeaveRequest> {
    let tx = pool.conn.transaction()?;

    let mut request = queries::get_request(&tx, request_id)?;

    if request.employee_id != actor_id {
        return Err(AppError::Forbidden(format!(
            "request {} does not belong to employee {}",
            request_id, actor_id
        )));
    }
    if request.status != LeaveStatus::Pending {
        return Err(AppError::BadRequest(format!(
            "only pending requests can be edited (request {} is {})",
            request_id,
            request.status.to_db_str()
        )));
    }

    if let Some(s) = start {
        request.start_date = s;
    }
    if let Some(e) = end {
        request.end_date = e;
    }
    if let Some(h) = half_day_start {
        request.half_day_start = h;
    }
    if let Some(h) = half_day_end {
        request.half_day_end = h;
    }

    if request.end_date < request.start_date {
        return Err(AppError::Validation(format!(
            "end date {} is before start date {}",
            request.end_date, request.start_date
        )));
    }

    ensure_no_overlap(
        &tx,
        request.employee_id,
        request.category,
        request.start_date,
        request.end_date,
        Some(request.id),
    )?;

    request.total_days = request_days(
        &tx,
        cfg,
        request.employee_id,
        request.start_date,
        request.end_date,
        request.half_day_start,
        request.half_day_end,
    )?;

    queries::update_request(&tx, &request)?;

    ttlog(
        &tx,
        "leave_update",
        &format!("request {}", request.id),
        &format!(
            "updated to {}..{} ({} days)",
            request.start_date, request.end_date, request.total_days
        ),
    )?;

    tx.commit()?;
    Ok(request)
}

pub fn approve_request(
    pool: &mut DbPool,
    cfg: &Config,
    request_id: i64,
    approver_id: i64,
) -> AppResult<LeaveRequest> {
    let tx = pool.conn.transaction()?;

    queries::get_employee(&tx, approver_id)?;
    let mut request = queries::get_request(&tx, request_id)?;

    if request.employee_id == approver_id {
        return Err(AppError::Forbidden(
            "employees cannot approve their own requests".into(),
        ));
    }
    if !request
        .status
        .can_transition_to(LeaveStatus::Approved, request.category)
    {
        return Err(AppError::BadRequest(format!(
            "request {} cannot be approved from state {}",
            request_id,
            request.status.to_db_str()
        )));
    }

    // commit the cost against the yearly balance
    if request.category.consumes_balance() {
        let year = request.start_date.year();
        let mut balance = get_or_create_balance(&tx, cfg, request.employee_id, year)?;

        if request.total_days > balance.remaining_days() {
            return Err(AppError::BadRequest(format!(
                "insufficient balance: request needs {} days, {} remaining",
                request.total_days,
                balance.remaining_days()
            )));
        }

        balance.used_days += request.total_days;
        queries::update_balance(&tx, &balance)?;
    }

    request.status = LeaveStatus::Approved;
    request.approver_id = Some(approver_id);
    queries::update_request(&tx, &request)?;

    ttlog(
        &tx,
        "leave_approve",
        &format!("request {}", request.id),
        &format!("approved by employee {}", approver_id),
    )?;

    tx.commit()?;
    Ok(request)
}

pub fn reject_request(
    pool: &mut DbPool,
    request_id: i64,
    approver_id: i64,
    reason: Option<String>,
) -> AppResult<LeaveRequest> {
    let tx = pool.conn.transaction()?;

    queries::get_employee(&tx, approver_id)?;
    let mut request = queries::get_request(&tx, request_id)?;

    if request.employee_id == approver_id {
        return Err(AppError::Forbidden(
            "employees cannot reject their own requests".into(),
        ));
    }
    if !request
        .status
        .can_transition_to(LeaveStatus::Rejected, request.category)
    {
        return Err(AppError::BadRequest(format!(
            "request {} cannot be rejected from state {}",
            request_id,
            request.status.to_db_str()
        )));
    }

    request.status = LeaveStatus::Rejected;
    request.approver_id = Some(approver_id);
    request.rejection_reason = reason;
    queries::update_request(&tx, &request)?;

    ttlog(
        &tx,
        "leave_reject",
        &format!("request {}", request.id),
        &format!("rejected by employee {}", approver_id),
    )?;

    tx.commit()?;
    Ok(request)
}

/// Cancel a request. Cancelling a pending request touches nothing;
/// cancelling a previously approved one releases its committed days.
pub fn cancel_request(
    pool: &mut DbPool,
    cfg: &Config,
    request_id: i64,
    actor_id: i64,
) -> AppResult<LeaveRequest> {
    let tx = pool.conn.transaction()?;

    let mut request = queries::get_request(&tx, request_id)?;

    if request.employee_id != actor_id {
        return Err(AppError::Forbidden(format!(
            "request {} does not belong to employee {}",
            request_id, actor_id
        )));
    }
    if !request
        .status
        .can_transition_to(LeaveStatus::Cancelled, request.category)
    {
        return Err(AppError::BadRequest(format!(
            "request {} cannot be cancelled from state {}",
            request_id,
            request.status.to_db_str()
        )));
    }

    let was_approved = request.status == LeaveStatus::Approved;

    if was_approved && request.category.consumes_balance() {
        let year = request.start_date.year();
        let mut balance = get_or_create_balance(&tx, cfg, request.employee_id, year)?;
        balance.used_days = (balance.used_days - request.total_days).max(0.0);
        queries::update_balance(&tx, &balance)?;
    }

    request.status = LeaveStatus::Cancelled;
    queries::update_request(&tx, &request)?;

    ttlog(
        &tx,
        "leave_cancel",
        &format!("request {}", request.id),
        &format!(
            "cancelled by employee {} (was {})",
            actor_id,
            if was_approved { "approved" } else { "pending" }
        ),
    )?;

    tx.commit()?;
    Ok(request)
}

/// Close out an approved business trip. Only trips complete; other
/// categories end via cancel or simply stay approved.
pub fn complete_request(pool: &mut DbPool, request_id: i64, actor_id: i64) -> AppResult<LeaveRequest> {
    let tx = pool.conn.transaction()?;

    queries::get_employee(&tx, actor_id)?;
    let mut request = queries::get_request(&tx, request_id)?;

    if !request
        .status
        .can_transition_to(LeaveStatus::Completed, request.category)
    {
        return Err(AppError::BadRequest(format!(
            "request {} ({}) cannot be completed from state {}",
            request_id,
            request.category.label(),
            request.status.to_db_str()
        )));
    }

    request.status = LeaveStatus::Completed;
    queries::update_request(&tx, &request)?;

    ttlog(
        &tx,
        "leave_complete",
        &format!("request {}", request.id),
        &format!("completed by employee {}", actor_id),
    )?;

    tx.commit()?;
    Ok(request)
}
