//! Statutory labor-time rule check.
//!
//! Pure function over a day's aggregated minutes. The thresholds are
//! named constants so the check stays auditable and testable on its own.

/// Work beyond six hours requires a break of at least 30 minutes.
pub const BREAK_REQUIRED_AFTER_MINUTES: i64 = 360;
pub const MIN_BREAK_MINUTES: i64 = 30;

/// Work beyond nine hours requires at least 45 minutes of break.
pub const LONG_BREAK_REQUIRED_AFTER_MINUTES: i64 = 540;
pub const MIN_LONG_BREAK_MINUTES: i64 = 45;

/// Hard cap on daily working time (ten hours).
pub const MAX_DAILY_WORK_MINUTES: i64 = 600;

#[derive(Debug, Clone)]
pub struct ComplianceVerdict {
    pub is_compliant: bool,
    pub notes: Vec<String>,
}

impl ComplianceVerdict {
    /// Violations joined for the `compliance_notes` column; None when
    /// the day is compliant.
    pub fn notes_joined(&self) -> Option<String> {
        if self.notes.is_empty() {
            None
        } else {
            Some(self.notes.join("; "))
        }
    }
}

pub fn check_compliance(work_minutes: i64, break_minutes: i64) -> ComplianceVerdict {
    let mut notes = Vec::new();

    if work_minutes > BREAK_REQUIRED_AFTER_MINUTES && break_minutes < MIN_BREAK_MINUTES {
        notes.push(format!(
            "Work over {} h requires a break of at least {} min (taken: {} min)",
            BREAK_REQUIRED_AFTER_MINUTES / 60,
            MIN_BREAK_MINUTES,
            break_minutes
        ));
    }

    if work_minutes > LONG_BREAK_REQUIRED_AFTER_MINUTES && break_minutes < MIN_LONG_BREAK_MINUTES {
        notes.push(format!(
            "Work over {} h requires breaks totalling at least {} min (taken: {} min)",
            LONG_BREAK_REQUIRED_AFTER_MINUTES / 60,
            MIN_LONG_BREAK_MINUTES,
            break_minutes
        ));
    }

    if work_minutes > MAX_DAILY_WORK_MINUTES {
        notes.push(format!(
            "Daily working time exceeds the {} h maximum ({} min worked)",
            MAX_DAILY_WORK_MINUTES / 60,
            work_minutes
        ));
    }

    ComplianceVerdict {
        is_compliant: notes.is_empty(),
        notes,
    }
}
