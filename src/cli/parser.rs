use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for staffclock
/// CLI application to track clock events, daily accounting and leave
#[derive(Parser)]
#[command(
    name = "staffclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time & leave accounting: clock events, daily summaries, compliance and leave balances on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the employee directory
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage the public-holiday calendar
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Record a clock event (in/out/break)
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Show the live status of an employee
    Status {
        #[arg(long = "employee", short = 'e')]
        employee: i64,

        /// Reference date (defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Reference time HH:MM (defaults to the wall clock)
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Show (computing if absent) the daily summary for one day
    Summary {
        #[arg(long = "employee", short = 'e')]
        employee: i64,

        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Timesheet over a range: summaries, entries and totals
    Timesheet {
        #[arg(long = "employee", short = 'e')]
        employee: i64,

        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or start:end
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: String,

        /// Export instead of printing
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long = "events", short = 'v', help = "Include raw clock events")]
        events: bool,
    },

    /// Administrative corrections of clock events (manager only)
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Leave requests: create, update, approve, reject, cancel
    Leave {
        #[command(subcommand)]
        action: LeaveAction,
    },

    /// Yearly leave balances
    Balance {
        #[command(subcommand)]
        action: BalanceAction,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee to the directory
    Add {
        name: String,

        #[arg(long = "target", help = "Daily work target in minutes")]
        daily_target_minutes: Option<i64>,

        #[arg(
            long = "work-days",
            help = "Work-day set, e.g. 1,2,3,4,5 (1=Mon .. 7=Sun)"
        )]
        work_days: Option<String>,

        #[arg(long = "leave-days", help = "Annual vacation entitlement in days")]
        annual_leave_days: Option<f64>,

        #[arg(long = "max-carry-over", help = "Cap on days carried into the next year")]
        max_carry_over: Option<f64>,

        #[arg(long = "manager", help = "Manager employee id")]
        manager: Option<i64>,
    },

    /// List all employees
    List,

    /// Update directory fields of an employee
    Set {
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "target")]
        daily_target_minutes: Option<i64>,

        #[arg(long = "work-days")]
        work_days: Option<String>,

        #[arg(long = "leave-days")]
        annual_leave_days: Option<f64>,

        #[arg(long = "max-carry-over")]
        max_carry_over: Option<f64>,

        #[arg(long = "manager")]
        manager: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Register a public holiday
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "name", default_value = "")]
        name: String,
    },

    /// List registered holidays
    List,
}

#[derive(clap::Args)]
pub struct ClockArgs {
    #[arg(long = "employee", short = 'e')]
    pub employee: i64,

    /// Event source: web, terminal or manual
    #[arg(long = "source", default_value = "web")]
    pub source: String,

    #[arg(long = "terminal", help = "Terminal identifier (for terminal source)")]
    pub terminal: Option<String>,

    #[arg(long = "notes")]
    pub notes: Option<String>,

    /// Event date (defaults to today)
    #[arg(long = "date")]
    pub date: Option<String>,

    /// Event time HH:MM (defaults to the wall clock)
    #[arg(long = "at")]
    pub at: Option<String>,
}

#[derive(Subcommand)]
pub enum ClockAction {
    /// Clock in (requires state CLOCKED_OUT)
    In(ClockArgs),
    /// Clock out (requires state CLOCKED_IN)
    Out(ClockArgs),
    /// Start a break (requires state CLOCKED_IN)
    BreakStart(ClockArgs),
    /// End a break (requires state ON_BREAK)
    BreakEnd(ClockArgs),
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Insert a manual clock event, bypassing transition validation
    Add {
        #[arg(long = "manager", short = 'm')]
        manager: i64,

        #[arg(long = "employee", short = 'e')]
        employee: i64,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Time (HH:MM)
        time: String,

        /// Event kind: clock_in, clock_out, break_start, break_end
        kind: String,

        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Edit an existing clock event by id
    Edit {
        #[arg(long = "manager", short = 'm')]
        manager: i64,

        /// Event id
        id: i64,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "at")]
        time: Option<String>,

        #[arg(long = "kind")]
        kind: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Delete a clock event by id
    Del {
        #[arg(long = "manager", short = 'm')]
        manager: i64,

        /// Event id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum LeaveAction {
    /// File a new leave request (starts pending)
    Create {
        #[arg(long = "employee", short = 'e')]
        employee: i64,

        /// Category: vacation, sick or trip
        category: String,

        /// First day (YYYY-MM-DD)
        start: String,

        /// Last day (YYYY-MM-DD)
        end: String,

        #[arg(long = "half-start", help = "Count the first day as a half day")]
        half_day_start: bool,

        #[arg(long = "half-end", help = "Count the last day as a half day")]
        half_day_end: bool,
    },

    /// Edit a still-pending request
    Update {
        /// Request id
        id: i64,

        #[arg(long = "employee", short = 'e')]
        employee: i64,

        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long = "half-start")]
        half_day_start: Option<bool>,

        #[arg(long = "half-end")]
        half_day_end: Option<bool>,
    },

    /// Cancel a pending or approved request
    Cancel {
        /// Request id
        id: i64,

        #[arg(long = "employee", short = 'e')]
        employee: i64,
    },

    /// Approve a pending request (not your own)
    Approve {
        /// Request id
        id: i64,

        #[arg(long = "approver", short = 'a')]
        approver: i64,
    },

    /// Reject a pending request (not your own)
    Reject {
        /// Request id
        id: i64,

        #[arg(long = "approver", short = 'a')]
        approver: i64,

        #[arg(long = "reason")]
        reason: Option<String>,
    },

    /// Mark an approved business trip as completed
    Complete {
        /// Request id
        id: i64,

        #[arg(long = "actor")]
        actor: i64,
    },

    /// List the requests of an employee
    List {
        #[arg(long = "employee", short = 'e')]
        employee: i64,
    },
}

#[derive(Subcommand)]
pub enum BalanceAction {
    /// Show (lazily creating) the yearly balance
    Show {
        #[arg(long = "employee", short = 'e')]
        employee: i64,

        #[arg(long = "year", short = 'y')]
        year: i32,
    },

    /// Administrative correction of balance fields
    Set {
        #[arg(long = "employee", short = 'e')]
        employee: i64,

        #[arg(long = "year", short = 'y')]
        year: i32,

        #[arg(long = "total")]
        total_days: Option<f64>,

        #[arg(long = "used")]
        used_days: Option<f64>,

        #[arg(long = "carried")]
        carried_over_days: Option<f64>,
    },

    /// Force a recompute of the carried-over days
    Carryover {
        #[arg(long = "employee", short = 'e')]
        employee: i64,

        #[arg(long = "year", short = 'y')]
        year: i32,
    },
}
