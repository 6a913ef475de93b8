use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::current_status;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::{parse_date, today};
use crate::utils::mins2readable;
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { employee, date, at } = cmd {
        let d = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => today(),
        };
        let t = match at {
            Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
            None => chrono::Local::now().time(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let snap = current_status(&mut pool, *employee, d.and_time(t))?;

        header(format!("Employee {} — {}", employee, snap.state.label()));

        if let Some(since) = snap.clocked_in_since {
            println!("Clocked in since : {}", since.format("%Y-%m-%d %H:%M"));
        }
        if let Some(since) = snap.break_started_at {
            println!("On break since   : {}", since.format("%Y-%m-%d %H:%M"));
        }

        println!(
            "Current session  : {} worked, {} on break",
            mins2readable(snap.elapsed_work_minutes, false, false),
            mins2readable(snap.elapsed_break_minutes, false, false)
        );
        println!(
            "Today            : {} worked, {} on break",
            mins2readable(snap.today_work_minutes, false, false),
            mins2readable(snap.today_break_minutes, false, false)
        );
    }

    Ok(())
}
