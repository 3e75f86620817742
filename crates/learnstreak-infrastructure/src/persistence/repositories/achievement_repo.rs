use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;
use tracing::debug;

use learnstreak_domain::achievement::{
    AchievementCode, AchievementDefinition, AchievementRepository, AchievementUnlock,
    UnlockedAchievement,
};
use learnstreak_domain::shared::{DomainError, UserId};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct DefinitionRow {
    code: String,
    title: String,
    description: String,
    icon: String,
}

impl DefinitionRow {
    fn into_definition(self) -> AchievementDefinition {
        AchievementDefinition::restore(self.code, self.title, self.description, self.icon)
    }
}

#[derive(FromRow)]
struct UnlockedRow {
    code: String,
    title: String,
    description: String,
    icon: String,
    unlocked_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct UnlockRow {
    user_id: String,
    code: String,
    unlocked_at: DateTime<Utc>,
}

pub struct SqliteAchievementRepository {
    base: SqliteRepositoryBase,
}

impl SqliteAchievementRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl AchievementRepository for SqliteAchievementRepository {
    async fn create_definition_if_absent(
        &self,
        definition: &AchievementDefinition,
    ) -> Result<bool, DomainError> {
        let query = r#"
            INSERT INTO achievements (code, title, description, icon)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(code) DO NOTHING
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(definition.code().as_str())
                    .bind(definition.title())
                    .bind(definition.description())
                    .bind(definition.icon()),
                "Create achievement definition",
            )
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_definition(
        &self,
        code: &AchievementCode,
    ) -> Result<Option<AchievementDefinition>, DomainError> {
        let query = "SELECT code, title, description, icon FROM achievements WHERE code = ?1";

        let row: Option<DefinitionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(code.as_str()),
                "Find achievement by code",
            )
            .await?;

        Ok(row.map(DefinitionRow::into_definition))
    }

    async fn list_definitions(&self) -> Result<Vec<AchievementDefinition>, DomainError> {
        let query = "SELECT code, title, description, icon FROM achievements ORDER BY id ASC";

        let rows: Vec<DefinitionRow> = self
            .base
            .fetch_all(sqlx::query_as(query), "List achievement definitions")
            .await?;

        Ok(rows.into_iter().map(DefinitionRow::into_definition).collect())
    }

    async fn record_unlock_if_absent(
        &self,
        unlock: &AchievementUnlock,
    ) -> Result<bool, DomainError> {
        // Single statement: the UNIQUE (user_id, achievement_id) constraint
        // turns a racing duplicate into a no-op instead of an error.
        let query = r#"
            INSERT INTO user_achievements (user_id, achievement_id, unlocked_at)
            SELECT ?1, id, ?3 FROM achievements WHERE code = ?2
            ON CONFLICT(user_id, achievement_id) DO NOTHING
        "#;

        let result = self
            .base
            .execute(
                sqlx::query(query)
                    .bind(unlock.user_id.as_str())
                    .bind(unlock.code.as_str())
                    .bind(unlock.unlocked_at),
                "Record achievement unlock",
            )
            .await?;

        let inserted = result.rows_affected() == 1;
        debug!(
            user_id = %unlock.user_id,
            code = %unlock.code,
            inserted,
            "Unlock insert-if-absent executed"
        );

        Ok(inserted)
    }

    async fn find_unlock(
        &self,
        user_id: &UserId,
        code: &AchievementCode,
    ) -> Result<Option<AchievementUnlock>, DomainError> {
        let query = r#"
            SELECT ua.user_id, a.code, ua.unlocked_at
            FROM user_achievements ua
            INNER JOIN achievements a ON a.id = ua.achievement_id
            WHERE ua.user_id = ?1 AND a.code = ?2
        "#;

        let row: Option<UnlockRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(user_id.as_str()).bind(code.as_str()),
                "Find achievement unlock",
            )
            .await?;

        Ok(row.map(|r| AchievementUnlock {
            user_id: UserId::from_string(&r.user_id),
            code: AchievementCode::from_string(&r.code),
            unlocked_at: r.unlocked_at,
        }))
    }

    async fn list_unlocked(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UnlockedAchievement>, DomainError> {
        let query = r#"
            SELECT a.code, a.title, a.description, a.icon, ua.unlocked_at
            FROM user_achievements ua
            INNER JOIN achievements a ON a.id = ua.achievement_id
            WHERE ua.user_id = ?1
            ORDER BY ua.unlocked_at DESC, ua.id DESC
        "#;

        let rows: Vec<UnlockedRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "List unlocked achievements",
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| UnlockedAchievement {
                definition: AchievementDefinition::restore(r.code, r.title, r.description, r.icon),
                unlocked_at: r.unlocked_at,
            })
            .collect())
    }
}
