use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the calendar file; relative paths resolve against the
    /// current working directory.
    #[serde(default = "default_calendar_file")]
    pub calendar_file: String,

    /// Hours subtracted from entered local times to reach UTC.
    /// 2 = Berlin summer time, 1 = winter time.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i64,
}

fn default_calendar_file() -> String {
    "arbeit.ics".to_string()
}

fn default_utc_offset() -> i64 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar_file: default_calendar_file(),
            utc_offset_hours: default_utc_offset(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("arbeitskal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".arbeitskal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("arbeitskal.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A present-but-unparsable file is an error the caller may degrade on.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }
}
