use super::clock_state::ClockState;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Live view of one employee, rebuilt from the day's event log on every
/// call. The open interval (if any) is closed with "now" for the elapsed
/// counters only; nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub employee_id: i64,
    pub state: ClockState,
    pub clocked_in_since: Option<NaiveDateTime>,
    pub break_started_at: Option<NaiveDateTime>,
    pub elapsed_work_minutes: i64,
    pub elapsed_break_minutes: i64,
    pub today_work_minutes: i64,
    pub today_break_minutes: i64,
}
