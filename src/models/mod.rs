pub mod clock_event;
pub mod clock_state;
pub mod daily_summary;
pub mod employee;
pub mod event_source;
pub mod event_type;
pub mod leave_balance;
pub mod leave_category;
pub mod leave_request;
pub mod leave_status;
pub mod status_snapshot;
pub mod timesheet;
