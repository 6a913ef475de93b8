use super::{leave_category::LeaveCategory, leave_status::LeaveStatus};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub category: LeaveCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub half_day_start: bool,
    pub half_day_end: bool,
    /// Working days consumed by this request. Always recomputed by the
    /// engine, never taken from the caller.
    pub total_days: f64,
    pub status: LeaveStatus,
    pub approver_id: Option<i64>,
    pub rejection_reason: Option<String>,
    pub created_at: String,
}

impl LeaveRequest {
    pub fn new(
        employee_id: i64,
        category: LeaveCategory,
        start_date: NaiveDate,
        end_date: NaiveDate,
        half_day_start: bool,
        half_day_end: bool,
        total_days: f64,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            category,
            start_date,
            end_date,
            half_day_start,
            half_day_end,
            total_days,
            status: LeaveStatus::Pending,
            approver_id: None,
            rejection_reason: None,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
