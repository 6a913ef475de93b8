use chrono::NaiveDate;
use serde::Serialize;

/// Derived per-day accounting row. Always reproducible by re-running the
/// accounting engine over that day's events; safe to discard and recompute.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub work_minutes: i64,
    pub break_minutes: i64,
    pub overtime_minutes: i64,
    pub is_compliant: bool,
    pub compliance_notes: Option<String>,
}

impl DailySummary {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
