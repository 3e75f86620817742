use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use learnstreak_domain::shared::DomainError;
use tracing::{debug, info};

pub const ENV_DB_PATH: &str = "LEARNSTREAK_DB_PATH";
pub const ENV_LOG_DIR: &str = "LEARNSTREAK_LOG_DIR";
pub const ENV_DB_MAX_CONNECTIONS: &str = "LEARNSTREAK_DB_MAX_CONNECTIONS";
pub const ENV_DB_ACQUIRE_TIMEOUT_SECS: &str = "LEARNSTREAK_DB_ACQUIRE_TIMEOUT_SECS";

/// Process-level configuration, owned by the entry point
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Directory for rolling JSON log files
    pub log_dir: PathBuf,

    /// Upper bound of pooled SQLite connections
    pub db_max_connections: u32,

    /// How long a request waits for a pooled connection
    pub db_acquire_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        let db_filename = if cfg!(debug_assertions) {
            "learnstreak-dev.db"
        } else {
            "learnstreak.db"
        };

        Self {
            database_path: data_dir.join(db_filename),
            log_dir: data_dir.join("logs"),
            db_max_connections: 5,
            db_acquire_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `LEARNSTREAK_*` environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DB_PATH) {
            config.database_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(max) = parse_var::<u32>(&lookup, ENV_DB_MAX_CONNECTIONS)? {
            if max == 0 {
                return Err(DomainError::Configuration(format!(
                    "{} must be at least 1",
                    ENV_DB_MAX_CONNECTIONS
                )));
            }
            config.db_max_connections = max;
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_DB_ACQUIRE_TIMEOUT_SECS)? {
            config.db_acquire_timeout = Duration::from_secs(secs);
        }

        debug!(?config, "Configuration resolved");
        Ok(config)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, DomainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            DomainError::Configuration(format!("Invalid {} value '{}': {}", key, raw, e))
        }),
    }
}

fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("learnstreak"),
        None => {
            info!("No platform data directory, using working directory");
            PathBuf::from(".learnstreak")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(10));
        assert!(config.log_dir.ends_with("logs"));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DB_PATH, "/tmp/ls/test.db"),
            (ENV_LOG_DIR, "/tmp/ls/logs"),
            (ENV_DB_MAX_CONNECTIONS, "2"),
            (ENV_DB_ACQUIRE_TIMEOUT_SECS, " 3 "),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/ls/test.db"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/ls/logs"));
        assert_eq!(config.db_max_connections, 2);
        assert_eq!(config.db_acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_number_is_configuration_error() {
        let result = AppConfig::from_lookup(lookup_from(&[(ENV_DB_MAX_CONNECTIONS, "many")]));
        assert!(matches!(result, Err(DomainError::Configuration(_))));

        let result = AppConfig::from_lookup(lookup_from(&[(ENV_DB_MAX_CONNECTIONS, "0")]));
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }
}
