use super::{clock_event::ClockEvent, daily_summary::DailySummary};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TimesheetTotals {
    pub work_minutes: i64,
    pub break_minutes: i64,
    pub overtime_minutes: i64,
    pub non_compliant_days: usize,
}

/// Reporting bundle for one employee over a date range: per-day summaries,
/// the raw entries behind them, and range totals.
#[derive(Debug, Clone, Serialize)]
pub struct Timesheet {
    pub employee_id: i64,
    pub summaries: Vec<DailySummary>,
    pub entries: Vec<ClockEvent>,
    pub totals: TimesheetTotals,
}

impl Timesheet {
    pub fn from_parts(
        employee_id: i64,
        summaries: Vec<DailySummary>,
        entries: Vec<ClockEvent>,
    ) -> Self {
        let mut totals = TimesheetTotals::default();
        for s in &summaries {
            totals.work_minutes += s.work_minutes;
            totals.break_minutes += s.break_minutes;
            totals.overtime_minutes += s.overtime_minutes;
            if !s.is_compliant {
                totals.non_compliant_days += 1;
            }
        }
        Self {
            employee_id,
            summaries,
            entries,
            totals,
        }
    }
}
