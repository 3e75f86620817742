use learnstreak_domain::shared::DomainError;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::fs::OpenOptions;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::AppConfig;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database described by `config`
    pub async fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let db_path = config.database_path.to_str().ok_or_else(|| {
            DomainError::Configuration(format!(
                "Database path is not valid UTF-8: {}",
                config.database_path.display()
            ))
        })?;

        Self::with_options(db_path, config.db_max_connections, config.db_acquire_timeout).await
    }

    pub async fn with_options(
        db_path: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let path = Path::new(db_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainError::Infrastructure(format!("Failed to create DB directory: {}", e))
            })?;
        }

        if !path.exists() {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(false)
                .open(path)
                .map_err(|e| {
                    DomainError::Infrastructure(format!("Failed to create DB file: {}", e))
                })?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(&format!("sqlite:{}", db_path))
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        info!(db_path, max_connections, "SQLite pool opened");

        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, DomainError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
