use learnstreak_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;

use super::ResultExt;

/// Shared pool handle plus query helpers that attach a context to errors
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query.execute(self.pool()).await.map_repo_error(context)
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query.fetch_optional(self.pool()).await.map_repo_error(context)
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query.fetch_all(self.pool()).await.map_repo_error(context)
    }
}
