use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
            println!("{yaml}");
            return Ok(());
        }

        if *check {
            if cfg.default_work_days.iter().any(|d| !(1..=7).contains(d)) {
                return Err(AppError::Config(
                    "default_work_days must contain weekday numbers 1..7".into(),
                ));
            }
            if cfg.default_daily_target_minutes <= 0 {
                return Err(AppError::Config(
                    "default_daily_target_minutes must be positive".into(),
                ));
            }
            success("Configuration file is valid");
            return Ok(());
        }

        info(format!(
            "Config file: {}",
            Config::config_file().to_string_lossy()
        ));
    }

    Ok(())
}
