use super::leave_category::LeaveCategory;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Completed,
}

impl LeaveStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
            LeaveStatus::Completed => "completed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            "cancelled" => Some(LeaveStatus::Cancelled),
            "completed" => Some(LeaveStatus::Completed),
            _ => None,
        }
    }

    /// Transition table of the request lifecycle. Rejected, cancelled and
    /// completed are terminal.
    /// PENDING → {APPROVED, REJECTED, CANCELLED}
    /// APPROVED → {CANCELLED, COMPLETED} (COMPLETED only for business trips)
    pub fn can_transition_to(&self, next: LeaveStatus, category: LeaveCategory) -> bool {
        match (self, next) {
            (LeaveStatus::Pending, LeaveStatus::Approved)
            | (LeaveStatus::Pending, LeaveStatus::Rejected)
            | (LeaveStatus::Pending, LeaveStatus::Cancelled)
            | (LeaveStatus::Approved, LeaveStatus::Cancelled) => true,
            (LeaveStatus::Approved, LeaveStatus::Completed) => {
                category == LeaveCategory::BusinessTrip
            }
            _ => false,
        }
    }
}
