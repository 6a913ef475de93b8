use serde::Serialize;

/// Yearly leave balance, one row per (employee, year), created lazily.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveBalance {
    pub id: i64,
    pub employee_id: i64,
    pub year: i32,
    pub total_days: f64,
    pub used_days: f64,
    pub carried_over_days: f64,
}

impl LeaveBalance {
    /// Remaining days are always derived, never stored as independent
    /// truth: max(0, total + carried − used).
    pub fn remaining_days(&self) -> f64 {
        (self.total_days + self.carried_over_days - self.used_days).max(0.0)
    }

    /// Signed remainder used by the carry-over rule, which must see a
    /// negative balance as "nothing to carry".
    pub fn signed_remaining(&self) -> f64 {
        self.total_days + self.carried_over_days - self.used_days
    }
}
