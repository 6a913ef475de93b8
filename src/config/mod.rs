use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Daily work target in minutes for employees without an explicit one.
    #[serde(default = "default_daily_target")]
    pub default_daily_target_minutes: i64,

    /// Work-day set (1 = Monday … 7 = Sunday) for employees without one.
    #[serde(default = "default_work_days")]
    pub default_work_days: Vec<u32>,

    /// Annual vacation entitlement in days.
    #[serde(default = "default_annual_leave")]
    pub default_annual_leave_days: f64,

    /// Cap on days carried over into the next year.
    #[serde(default = "default_max_carry_over")]
    pub default_max_carry_over: f64,

    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_daily_target() -> i64 {
    480
}
fn default_work_days() -> Vec<u32> {
    vec![1, 2, 3, 4, 5]
}
fn default_annual_leave() -> f64 {
    30.0
}
fn default_max_carry_over() -> f64 {
    10.0
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_daily_target_minutes: default_daily_target(),
            default_work_days: default_work_days(),
            default_annual_leave_days: default_annual_leave(),
            default_max_carry_over: default_max_carry_over(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            base.join("staffclock")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".staffclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("staffclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("staffclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode so tests never touch
        // the user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }

    pub fn save(&self) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml =
            serde_yaml::to_string(self).map_err(|e| io::Error::other(e.to_string()))?;
        fs::write(Self::config_file(), yaml)
    }
}
