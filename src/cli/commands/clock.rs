use crate::cli::parser::{ClockAction, ClockArgs, Commands};
use crate::config::Config;
use crate::core::ledger::record_event;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_source::EventSource;
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use crate::utils::date::{parse_date, today};
use crate::utils::time::parse_time;
use chrono::NaiveDateTime;

/// Resolve the event timestamp: explicit `--date`/`--at` override the
/// wall clock (deterministic runs, terminals submitting late).
fn resolve_now(args: &ClockArgs) -> AppResult<NaiveDateTime> {
    let date = match &args.date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => today(),
    };

    let time = match &args.at {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
        None => chrono::Local::now().time(),
    };

    Ok(date.and_time(time))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { action } = cmd {
        let (args, kind) = match action {
            ClockAction::In(a) => (a, EventType::ClockIn),
            ClockAction::Out(a) => (a, EventType::ClockOut),
            ClockAction::BreakStart(a) => (a, EventType::BreakStart),
            ClockAction::BreakEnd(a) => (a, EventType::BreakEnd),
        };

        let source = EventSource::from_code(&args.source)
            .ok_or_else(|| AppError::InvalidEventSource(args.source.clone()))?;

        let now = resolve_now(args)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let ev = record_event(
            &mut pool,
            cfg,
            args.employee,
            kind,
            source,
            args.terminal.clone(),
            args.notes.clone(),
            now,
        )?;

        success(format!(
            "{} recorded for employee {} at {}",
            kind.label(),
            args.employee,
            ev.get_date_time()
        ));
    }

    Ok(())
}
