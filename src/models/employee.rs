use crate::config::Config;
use serde::Serialize;
use std::collections::BTreeSet;

/// Directory row for one employee. Unset fields fall back to the
/// configured defaults via the `effective_*` accessors.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub daily_target_minutes: Option<i64>,
    /// Weekday numbers, 1 = Monday … 7 = Sunday, stored as "1,2,3,4,5".
    pub work_days: Option<BTreeSet<u32>>,
    pub annual_leave_days: Option<f64>,
    pub max_carry_over: Option<f64>,
    pub manager_id: Option<i64>,
}

impl Employee {
    pub fn effective_daily_target(&self, cfg: &Config) -> i64 {
        self.daily_target_minutes
            .unwrap_or(cfg.default_daily_target_minutes)
    }

    pub fn effective_work_days(&self, cfg: &Config) -> BTreeSet<u32> {
        self.work_days
            .clone()
            .unwrap_or_else(|| cfg.default_work_days.iter().copied().collect())
    }

    pub fn effective_annual_leave_days(&self, cfg: &Config) -> f64 {
        self.annual_leave_days
            .unwrap_or(cfg.default_annual_leave_days)
    }

    pub fn effective_max_carry_over(&self, cfg: &Config) -> f64 {
        self.max_carry_over.unwrap_or(cfg.default_max_carry_over)
    }
}

/// Parse the "1,2,3,4,5" work-day column. Invalid entries are dropped.
pub fn parse_work_days(s: &str) -> BTreeSet<u32> {
    s.split(',')
        .filter_map(|p| p.trim().parse::<u32>().ok())
        .filter(|d| (1..=7).contains(d))
        .collect()
}

pub fn work_days_to_db(days: &BTreeSet<u32>) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
