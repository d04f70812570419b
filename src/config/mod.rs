use crate::core::layout::TableNames;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::clock::Zone;
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// `local`, `UTC` or a fixed offset such as `+02:00`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_rooms_table")]
    pub rooms_table: String,
    #[serde(default = "default_areas_table")]
    pub areas_table: String,
    #[serde(default = "default_staff_table")]
    pub staff_table: String,
    /// Time (HH:MM) at which the external scheduler should run `reset`.
    #[serde(default = "default_reset_time")]
    pub reset_time: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    "local".to_string()
}
fn default_rooms_table() -> String {
    "Rooms".to_string()
}
fn default_areas_table() -> String {
    "Area".to_string()
}
fn default_staff_table() -> String {
    "Staff".to_string()
}
fn default_reset_time() -> String {
    "00:05".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            timezone: default_timezone(),
            rooms_table: default_rooms_table(),
            areas_table: default_areas_table(),
            staff_table: default_staff_table(),
            reset_time: default_reset_time(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `RHOUSEKEEPER_HOME` overrides it.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RHOUSEKEEPER_HOME") {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhousekeeper")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rhousekeeper")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhousekeeper.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhousekeeper.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn zone(&self) -> AppResult<Zone> {
        Zone::parse(&self.timezone)
    }

    pub fn tables(&self) -> TableNames {
        TableNames {
            rooms: self.rooms_table.clone(),
            areas: self.areas_table.clone(),
            staff: self.staff_table.clone(),
        }
    }

    /// Initialize configuration and database files.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if is_test {
            Config::default()
        } else {
            Config::load()?
        };

        if let Some(name) = custom_db {
            config.database = resolve_in(&dir, &name).to_string_lossy().to_string();
        }

        if !is_test {
            config.save()?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
