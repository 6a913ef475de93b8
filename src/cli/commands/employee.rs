use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, parse_work_days, work_days_to_db};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

fn parse_work_days_arg(s: &str) -> AppResult<std::collections::BTreeSet<u32>> {
    let days = parse_work_days(s);
    if days.is_empty() {
        return Err(AppError::Validation(format!(
            "invalid work-day set '{s}': use weekday numbers 1..7 separated by commas"
        )));
    }
    Ok(days)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add {
                name,
                daily_target_minutes,
                work_days,
                annual_leave_days,
                max_carry_over,
                manager,
            } => {
                if let Some(m) = manager {
                    queries::get_employee(&pool.conn, *m)?;
                }

                let emp = Employee {
                    id: 0,
                    name: name.clone(),
                    daily_target_minutes: *daily_target_minutes,
                    work_days: work_days
                        .as_deref()
                        .map(parse_work_days_arg)
                        .transpose()?,
                    annual_leave_days: *annual_leave_days,
                    max_carry_over: *max_carry_over,
                    manager_id: *manager,
                };

                let id = queries::insert_employee(&pool.conn, &emp)?;
                success(format!("Employee '{}' added with id {}", name, id));
            }

            EmployeeAction::List => {
                let mut table = Table::new(vec![
                    Column { header: "ID".into(), width: 4 },
                    Column { header: "Name".into(), width: 24 },
                    Column { header: "Target".into(), width: 8 },
                    Column { header: "Work days".into(), width: 12 },
                    Column { header: "Leave".into(), width: 7 },
                    Column { header: "Manager".into(), width: 8 },
                ]);

                for emp in queries::list_employees(&pool.conn)? {
                    table.add_row(vec![
                        emp.id.to_string(),
                        emp.name.clone(),
                        emp.effective_daily_target(cfg).to_string(),
                        work_days_to_db(&emp.effective_work_days(cfg)),
                        format!("{}", emp.effective_annual_leave_days(cfg)),
                        emp.manager_id
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "-".into()),
                    ]);
                }

                print!("{}", table.render());
            }

            EmployeeAction::Set {
                id,
                name,
                daily_target_minutes,
                work_days,
                annual_leave_days,
                max_carry_over,
                manager,
            } => {
                let mut emp = queries::get_employee(&pool.conn, *id)?;

                if let Some(n) = name {
                    emp.name = n.clone();
                }
                if let Some(t) = daily_target_minutes {
                    if *t <= 0 {
                        return Err(AppError::Validation(
                            "daily target must be positive".into(),
                        ));
                    }
                    emp.daily_target_minutes = Some(*t);
                }
                if let Some(w) = work_days {
                    emp.work_days = Some(parse_work_days_arg(w)?);
                }
                if let Some(d) = annual_leave_days {
                    emp.annual_leave_days = Some(*d);
                }
                if let Some(c) = max_carry_over {
                    emp.max_carry_over = Some(*c);
                }
                if let Some(m) = manager {
                    queries::get_employee(&pool.conn, *m)?;
                    emp.manager_id = Some(*m);
                }

                queries::update_employee(&pool.conn, &emp)?;
                success(format!("Employee {} updated", id));
            }
        }
    }

    Ok(())
}
