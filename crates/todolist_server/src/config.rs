//! Server configuration loaded from the environment.
//!
//! # Responsibility
//! - Read configuration once at startup.
//! - Fail fast with readable errors when required settings are missing.
//!
//! # Invariants
//! - `TODOLIST_DB_PATH` is the only required variable.
//! - Defaults must keep a bare environment runnable except for the database
//!   path.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use todolist_core::{default_log_level, LogTarget};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

const ENV_DB_PATH: &str = "TODOLIST_DB_PATH";
const ENV_PORT: &str = "TODOLIST_PORT";
const ENV_STATIC_DIR: &str = "TODOLIST_STATIC_DIR";
const ENV_LOG_LEVEL: &str = "TODOLIST_LOG_LEVEL";
const ENV_LOG_DIR: &str = "TODOLIST_LOG_DIR";

#[derive(Debug)]
pub enum ConfigError {
    MissingDbPath,
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDbPath => {
                write!(f, "required environment variable {ENV_DB_PATH} is not set")
            }
            Self::InvalidPort(value) => {
                write!(f, "invalid {ENV_PORT} value `{value}`; expected a port number")
            }
        }
    }
}

impl Error for ConfigError {}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub db_path: PathBuf,
    pub port: u16,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub log_target: LogTarget,
}

impl ServerConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    /// - `MissingDbPath` when `TODOLIST_DB_PATH` is absent or empty.
    /// - `InvalidPort` when `TODOLIST_PORT` is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let db_path = env::var(ENV_DB_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingDbPath)?;

        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = env::var(ENV_STATIC_DIR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let log_level = env::var(ENV_LOG_LEVEL)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        let log_target = env::var(ENV_LOG_DIR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map_or(LogTarget::Stderr, |dir| LogTarget::FileDir(PathBuf::from(dir)));

        Ok(Self {
            db_path: PathBuf::from(db_path),
            port,
            static_dir: PathBuf::from(static_dir),
            log_level,
            log_target,
        })
    }

    /// Returns the listen address for the configured port.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::{ServerConfig, DEFAULT_PORT};

    // Env-var mutation is process-global, so the cases share one test.
    #[test]
    fn from_env_requires_db_path_and_applies_defaults() {
        std::env::remove_var("TODOLIST_DB_PATH");
        std::env::remove_var("TODOLIST_PORT");
        assert!(ServerConfig::from_env().is_err());

        std::env::set_var("TODOLIST_DB_PATH", "/tmp/todolist-test.db");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir.to_str(), Some("public"));
        assert_eq!(config.bind_addr(), format!("0.0.0.0:{DEFAULT_PORT}"));

        std::env::set_var("TODOLIST_PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());

        std::env::set_var("TODOLIST_PORT", "8080");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);

        std::env::remove_var("TODOLIST_DB_PATH");
        std::env::remove_var("TODOLIST_PORT");
    }
}
