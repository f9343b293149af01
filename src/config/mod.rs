use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const APP_DIR: &str = ".rattendance";
pub const CONFIG_FILE: &str = "rattendance.conf";
pub const DATABASE_FILE: &str = "rattendance.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Daily cutoff (HH:MM) before which regular participants cannot log.
    #[serde(default = "default_cutoff_time")]
    pub cutoff_time: String,
    /// Identities that skip the cutoff and get a fixed duration.
    #[serde(default = "default_exempt_names")]
    pub exempt_names: Vec<String>,
    #[serde(default = "default_exempt_minutes")]
    pub exempt_minutes: i64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_cutoff_time() -> String {
    "16:00".to_string()
}
fn default_exempt_names() -> Vec<String> {
    vec!["TestUser 1".to_string(), "TestUser 2".to_string()]
}
fn default_exempt_minutes() -> i64 {
    240
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            cutoff_time: default_cutoff_time(),
            exempt_names: default_exempt_names(),
            exempt_minutes: default_exempt_minutes(),
        }
    }
}

impl Config {
    /// Configuration directory: `~/.rattendance` (or `./.rattendance` without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the full path of the default SQLite ledger
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Configuration loaded from {}", path.display());

        let database = cfg.database.clone();
        Ok(cfg.with_database(&database))
    }

    /// Point at another database; `~` is expanded and relative names land
    /// in the config directory.
    pub fn with_database(mut self, custom: &str) -> Self {
        self.database = resolve_in(&Self::config_dir(), custom)
            .to_string_lossy()
            .to_string();
        self
    }

    /// Create the config directory and, unless `is_test`, (re)write the config file.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !is_test {
            let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
            fs::write(&path, yaml)?;
            log::info!("Config file written: {}", path.display());
        }

        Ok(path)
    }
}
