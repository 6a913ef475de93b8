use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accounting::get_timesheet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv::export_csv, json::export_json};
use crate::ui::messages::{header, success};
use crate::utils::colors::{RESET, color_for_compliance};
use crate::utils::date::parse_range;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet {
        employee,
        range,
        format,
        file,
        events,
    } = cmd
    {
        let (start, end) = parse_range(range).map_err(AppError::InvalidDate)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let sheet = get_timesheet(&mut pool, cfg, *employee, start, end)?;

        if let Some(fmt) = format {
            let path = file
                .as_deref()
                .ok_or_else(|| AppError::Export("--file is required with --format".into()))?;

            match fmt {
                ExportFormat::Csv => export_csv(&sheet, Path::new(path), *events)?,
                ExportFormat::Json => export_json(&sheet, Path::new(path))?,
            }

            success(format!("Timesheet exported to {path}"));
            return Ok(());
        }

        header(format!("Employee {} — {} .. {}", employee, start, end));

        let mut table = Table::new(vec![
            Column { header: "Date".into(), width: 10 },
            Column { header: "Worked".into(), width: 8 },
            Column { header: "Breaks".into(), width: 8 },
            Column { header: "Overtime".into(), width: 9 },
            Column { header: "Compliant".into(), width: 9 },
        ]);

        for s in &sheet.summaries {
            table.add_row(vec![
                s.date_str(),
                mins2readable(s.work_minutes, false, true),
                mins2readable(s.break_minutes, false, true),
                mins2readable(s.overtime_minutes, true, true),
                format!(
                    "{}{}{}",
                    color_for_compliance(s.is_compliant),
                    if s.is_compliant { "yes" } else { "no" },
                    RESET
                ),
            ]);
        }

        print!("{}", table.render());

        println!(
            "Totals: {} worked, {} breaks, {} overtime, {} non-compliant day(s)",
            mins2readable(sheet.totals.work_minutes, false, false),
            mins2readable(sheet.totals.break_minutes, false, false),
            mins2readable(sheet.totals.overtime_minutes, true, false),
            sheet.totals.non_compliant_days
        );

        if *events {
            println!();
            for ev in &sheet.entries {
                println!(
                    "{} {}  {:<11} {:<8} {}",
                    ev.date_str(),
                    ev.time_str(),
                    ev.kind.to_db_str(),
                    ev.source.to_db_str(),
                    if ev.is_modified { "(modified)" } else { "" }
                );
            }
        }
    }

    Ok(())
}
