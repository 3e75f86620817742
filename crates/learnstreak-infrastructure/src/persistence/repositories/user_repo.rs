use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use learnstreak_domain::shared::{DomainError, UserId};
use learnstreak_domain::streak::StreakState;
use learnstreak_domain::user::{User, UserRepository};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct UserRow {
    id: String,
    name: String,
    current_streak: i64,
    longest_streak: i64,
    last_completion_date: Option<DateTime<Utc>>,
    streak_start_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, DomainError> {
        let current = streak_counter(self.current_streak, "current_streak", &self.id)?;
        let longest = streak_counter(self.longest_streak, "longest_streak", &self.id)?;

        Ok(User::restore(
            UserId::from_string(&self.id),
            self.name,
            StreakState::restore(
                current,
                longest,
                self.last_completion_date,
                self.streak_start_date,
            ),
            self.created_at,
        ))
    }
}

fn streak_counter(value: i64, column: &str, user_id: &str) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        DomainError::DataIntegrity(format!(
            "users.{} out of range for user {}: {}",
            column, user_id, value
        ))
    })
}

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_if_absent(&self, user: &User) -> Result<bool, DomainError> {
        let query = r#"
            INSERT INTO users (id, name, current_streak, longest_streak, last_completion_date, streak_start_date, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO NOTHING
        "#;

        let streak = user.streak();
        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(user.id().as_str())
                    .bind(user.name())
                    .bind(i64::from(streak.current_streak()))
                    .bind(i64::from(streak.longest_streak()))
                    .bind(streak.last_completion_date())
                    .bind(streak.streak_start_date())
                    .bind(user.created_at()),
                "Create user",
            )
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let query = "SELECT id, name, current_streak, longest_streak, last_completion_date, streak_start_date, created_at FROM users WHERE id = ?1";

        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find user by ID")
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update_streak(&self, id: &UserId, streak: &StreakState) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users SET
                current_streak = ?2,
                longest_streak = ?3,
                last_completion_date = ?4,
                streak_start_date = ?5
            WHERE id = ?1
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(id.as_str())
                    .bind(i64::from(streak.current_streak()))
                    .bind(i64::from(streak.longest_streak()))
                    .bind(streak.last_completion_date())
                    .bind(streak.streak_start_date()),
                "Update user streak",
            )
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
