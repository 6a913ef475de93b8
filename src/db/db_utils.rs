//! Maintenance helpers behind the `db` subcommand.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Run SQLite's integrity check and return its verdict line.
pub fn integrity_check(conn: &Connection) -> AppResult<String> {
    let verdict: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(verdict)
}

pub fn vacuum(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("VACUUM")?;
    Ok(())
}

/// Row counts for the main tables, for `db --info`.
pub fn table_counts(conn: &Connection) -> AppResult<Vec<(String, i64)>> {
    let tables = [
        "employees",
        "holidays",
        "clock_events",
        "daily_summaries",
        "leave_balances",
        "leave_requests",
        "log",
    ];

    let mut out = Vec::new();
    for t in tables {
        let n: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {t}"), [], |row| row.get(0))
            .map_err(|e| AppError::Other(format!("count {t}: {e}")))?;
        out.push((t.to_string(), n));
    }
    Ok(out)
}
