pub mod minutes;
pub mod working_days;
