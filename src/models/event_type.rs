use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl EventType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::ClockIn => "clock_in",
            EventType::ClockOut => "clock_out",
            EventType::BreakStart => "break_start",
            EventType::BreakEnd => "break_end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock_in" => Some(EventType::ClockIn),
            "clock_out" => Some(EventType::ClockOut),
            "break_start" => Some(EventType::BreakStart),
            "break_end" => Some(EventType::BreakEnd),
            _ => None,
        }
    }

    /// Human-readable label for tables and messages.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::ClockIn => "IN",
            EventType::ClockOut => "OUT",
            EventType::BreakStart => "BREAK",
            EventType::BreakEnd => "RESUME",
        }
    }
}
