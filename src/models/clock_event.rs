use super::{event_source::EventSource, event_type::EventType};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,       // ⇔ clock_events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,       // ⇔ clock_events.time (TEXT "HH:MM")
    pub kind: EventType,       // ⇔ clock_events.kind
    pub source: EventSource,   // ⇔ clock_events.source
    pub terminal_id: Option<String>,
    pub notes: Option<String>,
    pub is_modified: bool,     // set on any administrative correction
    pub modified_by: Option<i64>, // manager id when is_modified
    pub created_at: String,    // ISO8601
}

impl ClockEvent {
    /// Constructor for events produced by the regular clock commands.
    /// `is_modified` starts false; administrative edits flip it.
    pub fn new(
        employee_id: i64,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventType,
        source: EventSource,
        terminal_id: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            date,
            time,
            kind,
            source,
            terminal_id,
            notes,
            is_modified: false,
            modified_by: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Constructor for administrative manual entries: flagged as modified
    /// with the acting manager recorded.
    pub fn manual(
        employee_id: i64,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventType,
        manager_id: i64,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            date,
            time,
            kind,
            source: EventSource::Manual,
            terminal_id: None,
            notes,
            is_modified: true,
            modified_by: Some(manager_id),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn get_date_time(&self) -> String {
        self.date
            .and_time(self.time)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}
