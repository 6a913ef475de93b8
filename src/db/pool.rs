//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One connection per process; every mutating core operation runs its
//! whole read-validate-write cycle on this single handle, inside one
//! transaction, so per-employee state can never interleave.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
