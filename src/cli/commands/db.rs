use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::db_utils;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date");
        }

        if *check {
            let verdict = db_utils::integrity_check(&pool.conn)?;
            info(format!("Integrity check: {verdict}"));
        }

        if *vacuum {
            db_utils::vacuum(&pool.conn)?;
            success("Database vacuumed");
        }

        if *show_info {
            info(format!("Database: {}", cfg.database));
            for (table, count) in db_utils::table_counts(&pool.conn)? {
                println!("  {table:<18} {count}");
            }
        }
    }

    Ok(())
}
