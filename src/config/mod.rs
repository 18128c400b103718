use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_autosave_delay")]
    pub autosave_delay_ms: u64,
    #[serde(default = "default_status_flash")]
    pub status_flash_ms: u64,
    #[serde(default = "default_baseline_priorities")]
    pub baseline_priorities: usize,
    #[serde(default = "default_baseline_slots")]
    pub baseline_slots: usize,
    #[serde(default = "default_trim_rows")]
    pub trim_rows_on_clear: bool,
}

/// Upper bound for the millisecond settings (one day).
pub const MAX_DELAY_MS: u64 = 24 * 60 * 60 * 1000;

fn default_autosave_delay() -> u64 {
    1000
}
fn default_status_flash() -> u64 {
    2000
}
fn default_baseline_priorities() -> usize {
    3
}
fn default_baseline_slots() -> usize {
    5
}
fn default_trim_rows() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            autosave_delay_ms: default_autosave_delay(),
            status_flash_ms: default_status_flash(),
            baseline_priorities: default_baseline_priorities(),
            baseline_slots: default_baseline_slots(),
            trim_rows_on_clear: default_trim_rows(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("daysheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".daysheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("daysheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("daysheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Self = serde_yaml::from_str(&content)?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject millisecond settings the scheduler cannot represent sensibly.
    pub fn validate(&self) -> AppResult<()> {
        for (key, value) in [
            ("autosave_delay_ms", self.autosave_delay_ms),
            ("status_flash_ms", self.status_flash_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(AppError::ConfigValue(format!(
                    "{key} = {value} exceeds {MAX_DELAY_MS}"
                )));
            }
        }
        Ok(())
    }

    /// Initialize configuration file and database location.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
