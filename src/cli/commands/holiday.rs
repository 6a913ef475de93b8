use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holiday { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            HolidayAction::Add { date, name } => {
                let d =
                    parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
                queries::insert_holiday(&pool.conn, &d, name)?;
                success(format!("Holiday {} registered", d));
            }

            HolidayAction::List => {
                for (date, name) in queries::list_holidays(&pool.conn)? {
                    println!("{date}  {name}");
                }
            }
        }
    }

    Ok(())
}
