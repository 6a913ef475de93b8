use crate::cli::parser::{Commands, EntryAction};
use crate::config::Config;
use crate::core::ledger::{add_manual_entry, delete_entry, edit_entry};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;

fn parse_kind(s: &str) -> AppResult<EventType> {
    EventType::from_db_str(s).ok_or_else(|| AppError::InvalidEventType(s.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EntryAction::Add {
                manager,
                employee,
                date,
                time,
                kind,
                notes,
            } => {
                let d =
                    parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
                let t =
                    parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;
                let k = parse_kind(kind)?;

                let ev = add_manual_entry(
                    &mut pool,
                    cfg,
                    *manager,
                    *employee,
                    d,
                    t,
                    k,
                    notes.clone(),
                )?;
                success(format!(
                    "Manual {} inserted as event {} ({})",
                    k.label(),
                    ev.id,
                    ev.get_date_time()
                ));
            }

            EntryAction::Edit {
                manager,
                id,
                date,
                time,
                kind,
                notes,
            } => {
                let d = date
                    .as_deref()
                    .map(|s| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())))
                    .transpose()?;
                let t = time
                    .as_deref()
                    .map(|s| parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string())))
                    .transpose()?;
                let k = kind.as_deref().map(parse_kind).transpose()?;

                let ev = edit_entry(&mut pool, cfg, *manager, *id, d, t, k, notes.clone())?;
                success(format!("Event {} updated ({})", ev.id, ev.get_date_time()));
            }

            EntryAction::Del { manager, id } => {
                delete_entry(&mut pool, cfg, *manager, *id)?;
                success(format!("Event {} deleted", id));
            }
        }
    }

    Ok(())
}
