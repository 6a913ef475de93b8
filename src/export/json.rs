//! JSON timesheet export.

use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use std::fs::File;
use std::path::Path;

pub fn export_json(sheet: &Timesheet, path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, sheet).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
