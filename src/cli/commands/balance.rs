use crate::cli::parser::{BalanceAction, Commands};
use crate::config::Config;
use crate::core::leave;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::leave_balance::LeaveBalance;
use crate::ui::messages::{header, success};
use crate::utils::formatting::days2readable;

fn print_balance(b: &LeaveBalance) {
    header(format!("Employee {} — {}", b.employee_id, b.year));
    println!("Entitlement : {}", days2readable(b.total_days));
    println!("Carried over: {}", days2readable(b.carried_over_days));
    println!("Used        : {}", days2readable(b.used_days));
    println!("Remaining   : {}", days2readable(b.remaining_days()));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            BalanceAction::Show { employee, year } => {
                let b = leave::get_balance(&mut pool, cfg, *employee, *year)?;
                print_balance(&b);
            }

            BalanceAction::Set {
                employee,
                year,
                total_days,
                used_days,
                carried_over_days,
            } => {
                let b = leave::set_balance(
                    &mut pool,
                    cfg,
                    *employee,
                    *year,
                    *total_days,
                    *used_days,
                    *carried_over_days,
                )?;
                success("Balance corrected");
                print_balance(&b);
            }

            BalanceAction::Carryover { employee, year } => {
                let b = leave::trigger_carry_over(&mut pool, cfg, *employee, *year)?;
                success(format!(
                    "Carry-over recomputed: {} day(s)",
                    days2readable(b.carried_over_days)
                ));
            }
        }
    }

    Ok(())
}
