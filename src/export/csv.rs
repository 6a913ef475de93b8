//! CSV timesheet export.

use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use std::path::Path;

/// Write the per-day summary rows; with `with_entries` the raw clock
/// events follow in a second section.
pub fn export_csv(sheet: &Timesheet, path: &Path, with_entries: bool) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "date",
        "work_minutes",
        "break_minutes",
        "overtime_minutes",
        "compliant",
        "notes",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for s in &sheet.summaries {
        wtr.write_record([
            s.date_str(),
            s.work_minutes.to_string(),
            s.break_minutes.to_string(),
            s.overtime_minutes.to_string(),
            if s.is_compliant { "yes" } else { "no" }.to_string(),
            s.compliance_notes.clone().unwrap_or_default(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    if with_entries {
        wtr.write_record(["", "", "", "", "", ""])
            .map_err(|e| AppError::Export(e.to_string()))?;
        wtr.write_record(["date", "time", "kind", "source", "modified", "notes"])
            .map_err(|e| AppError::Export(e.to_string()))?;

        for ev in &sheet.entries {
            wtr.write_record([
                ev.date_str(),
                ev.time_str(),
                ev.kind.to_db_str().to_string(),
                ev.source.to_db_str().to_string(),
                if ev.is_modified { "yes" } else { "no" }.to_string(),
                ev.notes.clone().unwrap_or_default(),
            ])
            .map_err(|e| AppError::Export(e.to_string()))?;
        }
    }

    wtr.flush()?;
    Ok(())
}
