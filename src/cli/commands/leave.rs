use crate::cli::parser::{Commands, LeaveAction};
use crate::config::Config;
use crate::core::leave;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::leave_category::LeaveCategory;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::formatting::days2readable;
use crate::utils::table::{Column, Table};

fn parse_category(s: &str) -> AppResult<LeaveCategory> {
    LeaveCategory::from_code(s).ok_or_else(|| AppError::InvalidLeaveCategory(s.to_string()))
}

fn parse_date_arg(s: &str) -> AppResult<chrono::NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            LeaveAction::Create {
                employee,
                category,
                start,
                end,
                half_day_start,
                half_day_end,
            } => {
                let request = leave::create_request(
                    &mut pool,
                    cfg,
                    *employee,
                    parse_category(category)?,
                    parse_date_arg(start)?,
                    parse_date_arg(end)?,
                    *half_day_start,
                    *half_day_end,
                )?;
                success(format!(
                    "Request {} filed: {} {}..{} ({} days, pending)",
                    request.id,
                    request.category.label(),
                    request.start_date,
                    request.end_date,
                    days2readable(request.total_days)
                ));
            }

            LeaveAction::Update {
                id,
                employee,
                start,
                end,
                half_day_start,
                half_day_end,
            } => {
                let s = start.as_deref().map(parse_date_arg).transpose()?;
                let e = end.as_deref().map(parse_date_arg).transpose()?;

                let request = leave::update_request(
                    &mut pool,
                    cfg,
                    *id,
                    *employee,
                    s,
                    e,
                    *half_day_start,
                    *half_day_end,
                )?;
                success(format!(
                    "Request {} updated: {}..{} ({} days)",
                    request.id,
                    request.start_date,
                    request.end_date,
                    days2readable(request.total_days)
                ));
            }

            LeaveAction::Cancel { id, employee } => {
                let request = leave::cancel_request(&mut pool, cfg, *id, *employee)?;
                success(format!("Request {} cancelled", request.id));
            }

            LeaveAction::Approve { id, approver } => {
                let request = leave::approve_request(&mut pool, cfg, *id, *approver)?;
                success(format!(
                    "Request {} approved ({} days committed)",
                    request.id,
                    days2readable(request.total_days)
                ));
            }

            LeaveAction::Reject {
                id,
                approver,
                reason,
            } => {
                let request =
                    leave::reject_request(&mut pool, *id, *approver, reason.clone())?;
                success(format!("Request {} rejected", request.id));
            }

            LeaveAction::Complete { id, actor } => {
                let request = leave::complete_request(&mut pool, *id, *actor)?;
                success(format!("Request {} completed", request.id));
            }

            LeaveAction::List { employee } => {
                let mut table = Table::new(vec![
                    Column { header: "ID".into(), width: 4 },
                    Column { header: "Category".into(), width: 14 },
                    Column { header: "From".into(), width: 10 },
                    Column { header: "To".into(), width: 10 },
                    Column { header: "Days".into(), width: 5 },
                    Column { header: "Status".into(), width: 10 },
                ]);

                for r in queries::list_requests(&pool.conn, *employee)? {
                    table.add_row(vec![
                        r.id.to_string(),
                        r.category.label().to_string(),
                        r.start_date.to_string(),
                        r.end_date.to_string(),
                        days2readable(r.total_days),
                        r.status.to_db_str().to_string(),
                    ]);
                }

                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
