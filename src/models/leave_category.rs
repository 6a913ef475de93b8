use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LeaveCategory {
    Vacation,
    Sick,
    BusinessTrip,
}

impl LeaveCategory {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveCategory::Vacation => "vacation",
            LeaveCategory::Sick => "sick",
            LeaveCategory::BusinessTrip => "business_trip",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "vacation" => Some(LeaveCategory::Vacation),
            "sick" => Some(LeaveCategory::Sick),
            "business_trip" => Some(LeaveCategory::BusinessTrip),
            _ => None,
        }
    }

    /// Accept the short aliases used on the command line.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vacation" | "vac" => Some(LeaveCategory::Vacation),
            "sick" => Some(LeaveCategory::Sick),
            "business_trip" | "trip" => Some(LeaveCategory::BusinessTrip),
            _ => None,
        }
    }

    /// Only vacation consumes the yearly day balance. Sick leave and
    /// business trips are tracked but not deducted.
    pub fn consumes_balance(&self) -> bool {
        matches!(self, LeaveCategory::Vacation)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveCategory::Vacation => "vacation",
            LeaveCategory::Sick => "sick leave",
            LeaveCategory::BusinessTrip => "business trip",
        }
    }
}
