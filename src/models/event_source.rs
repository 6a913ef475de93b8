use serde::Serialize;

/// Where a clock event originated from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventSource {
    Web,
    Terminal,
    Manual,
}

impl EventSource {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventSource::Web => "web",
            EventSource::Terminal => "terminal",
            EventSource::Manual => "manual",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "web" => Some(EventSource::Web),
            "terminal" => Some(EventSource::Terminal),
            "manual" => Some(EventSource::Manual),
            _ => None,
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        Self::from_db_str(&s.to_lowercase())
    }
}
