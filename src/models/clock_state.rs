use super::event_type::EventType;
use serde::Serialize;

/// Live state of an employee, always derived from the most recent clock
/// event, never stored on its own.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    ClockedOut,
    ClockedIn,
    OnBreak,
}

impl ClockState {
    /// Derive the state from the latest event, if any.
    pub fn from_last_event(kind: Option<EventType>) -> Self {
        match kind {
            None | Some(EventType::ClockOut) => ClockState::ClockedOut,
            Some(EventType::ClockIn) | Some(EventType::BreakEnd) => ClockState::ClockedIn,
            Some(EventType::BreakStart) => ClockState::OnBreak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClockState::ClockedOut => "clocked out",
            ClockState::ClockedIn => "clocked in",
            ClockState::OnBreak => "on break",
        }
    }
}
