use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            name                  TEXT NOT NULL,
            daily_target_minutes  INTEGER,
            work_days             TEXT,
            annual_leave_days     REAL,
            max_carry_over        REAL,
            manager_id            INTEGER
        );
        "#,
    )?;
    Ok(())
}

fn create_holidays_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            date TEXT PRIMARY KEY,
            name TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn create_clock_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clock_events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL,
            date         TEXT NOT NULL,
            time         TEXT NOT NULL,
            kind         TEXT NOT NULL
                         CHECK(kind IN ('clock_in','clock_out','break_start','break_end')),
            source       TEXT NOT NULL DEFAULT 'web'
                         CHECK(source IN ('web','terminal','manual')),
            terminal_id  TEXT,
            notes        TEXT,
            is_modified  INTEGER NOT NULL DEFAULT 0,
            modified_by  INTEGER,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_clock_events_emp_date_time
            ON clock_events(employee_id, date, time);
        CREATE INDEX IF NOT EXISTS idx_clock_events_emp_date_kind
            ON clock_events(employee_id, date, kind);
        "#,
    )?;
    Ok(())
}

fn create_daily_summaries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_summaries (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id       INTEGER NOT NULL,
            date              TEXT NOT NULL,
            work_minutes      INTEGER NOT NULL DEFAULT 0,
            break_minutes     INTEGER NOT NULL DEFAULT 0,
            overtime_minutes  INTEGER NOT NULL DEFAULT 0,
            is_compliant      INTEGER NOT NULL DEFAULT 1,
            compliance_notes  TEXT,
            UNIQUE(employee_id, date)
        );
        "#,
    )?;
    Ok(())
}

fn create_leave_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS leave_balances (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id        INTEGER NOT NULL,
            year               INTEGER NOT NULL,
            total_days         REAL NOT NULL DEFAULT 0,
            used_days          REAL NOT NULL DEFAULT 0,
            carried_over_days  REAL NOT NULL DEFAULT 0,
            UNIQUE(employee_id, year)
        );

        CREATE TABLE IF NOT EXISTS leave_requests (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id       INTEGER NOT NULL,
            category          TEXT NOT NULL
                              CHECK(category IN ('vacation','sick','business_trip')),
            start_date        TEXT NOT NULL,
            end_date          TEXT NOT NULL,
            half_day_start    INTEGER NOT NULL DEFAULT 0,
            half_day_end      INTEGER NOT NULL DEFAULT 0,
            total_days        REAL NOT NULL DEFAULT 0,
            status            TEXT NOT NULL DEFAULT 'pending'
                              CHECK(status IN ('pending','approved','rejected','cancelled','completed')),
            approver_id       INTEGER,
            rejection_reason  TEXT,
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_leave_requests_emp_cat
            ON leave_requests(employee_id, category, status);
        "#,
    )?;
    Ok(())
}

/// Early builds stored clock events without the modification audit
/// columns. Add them in place when missing.
fn migrate_add_audit_columns(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "clock_events")? {
        return Ok(());
    }

    if table_has_column(conn, "clock_events", "is_modified")? {
        return Ok(());
    }

    warning("Adding audit columns to clock_events table...");

    conn.execute_batch(
        r#"
        ALTER TABLE clock_events ADD COLUMN is_modified INTEGER NOT NULL DEFAULT 0;
        ALTER TABLE clock_events ADD COLUMN modified_by INTEGER;
        "#,
    )?;
    Ok(())
}

/// Run every pending migration. Safe to call on every start; each step
/// is a no-op when the schema is already current.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_employees_table(conn)?;
    create_holidays_table(conn)?;
    create_clock_events_table(conn)?;
    create_daily_summaries_table(conn)?;
    create_leave_tables(conn)?;
    migrate_add_audit_columns(conn)?;
    Ok(())
}
