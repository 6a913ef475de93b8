pub mod balance;
pub mod clock;
pub mod config;
pub mod db;
pub mod employee;
pub mod entry;
pub mod holiday;
pub mod init;
pub mod leave;
pub mod log;
pub mod status;
pub mod summary;
pub mod timesheet;
