//! Overlap protection shared by all leave-request categories.
//!
//! Scope is per category: a vacation never conflicts with a business
//! trip on the same dates. Changing that needs product confirmation.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::leave_category::LeaveCategory;
use crate::models::leave_request::LeaveRequest;
use chrono::NaiveDate;
use rusqlite::Connection;

/// All same-category requests for the employee in a non-terminal state
/// (pending/approved) whose range intersects [start, end], minus
/// `exclude_id` (used for update-in-place checks).
pub fn find_overlapping(
    conn: &Connection,
    employee_id: i64,
    category: LeaveCategory,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<i64>,
) -> AppResult<Vec<LeaveRequest>> {
    queries::find_overlapping_requests(conn, employee_id, category, &start, &end, exclude_id)
}

/// Reject creation/update when any overlap exists.
pub fn ensure_no_overlap(
    conn: &Connection,
    employee_id: i64,
    category: LeaveCategory,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<i64>,
) -> AppResult<()> {
    let overlapping = find_overlapping(conn, employee_id, category, start, end, exclude_id)?;

    if let Some(first) = overlapping.first() {
        return Err(AppError::Conflict(format!(
            "{} request #{} ({}..{}, {}) overlaps the requested range {}..{}",
            first.category.label(),
            first.id,
            first.start_date,
            first.end_date,
            first.status.to_db_str(),
            start,
            end
        )));
    }

    Ok(())
}
