use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accounting::get_daily_summary;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_compliance, color_for_overtime};
use crate::utils::date::parse_date;
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { employee, date } = cmd {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let s = get_daily_summary(&mut pool, cfg, *employee, d)?;

        header(format!("Employee {} — {}", employee, s.date_str()));
        println!("Worked    : {}", mins2readable(s.work_minutes, false, false));
        println!("Breaks    : {}", mins2readable(s.break_minutes, false, false));
        println!(
            "Overtime  : {}{}{}",
            color_for_overtime(s.overtime_minutes),
            mins2readable(s.overtime_minutes, true, false),
            RESET
        );
        println!(
            "Compliant : {}{}{}",
            color_for_compliance(s.is_compliant),
            if s.is_compliant { "yes" } else { "no" },
            RESET
        );
        if let Some(notes) = &s.compliance_notes {
            println!("Notes     : {notes}");
        }
    }

    Ok(())
}
