use std::sync::Arc;

use learnstreak_domain::achievement::{
    codes, AchievementCode, AchievementDefinition, AchievementRepository, AchievementUnlock,
};
use learnstreak_domain::shared::UserId;
use learnstreak_infrastructure::persistence::repositories::SqliteAchievementRepository;
use learnstreak_infrastructure::persistence::Database;

mod test_helpers;

fn definition(code: &str, title: &str) -> AchievementDefinition {
    AchievementDefinition::new(code, title, "test badge", "🏅").expect("definition")
}

#[tokio::test]
async fn achievement_repo_definitions_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteAchievementRepository::new(Arc::new(pool));

    assert!(repo
        .create_definition_if_absent(&definition(codes::FIRST_CHAPTER, "First Chapter"))
        .await
        .expect("create"));
    assert!(!repo
        .create_definition_if_absent(&definition(codes::FIRST_CHAPTER, "Renamed"))
        .await
        .expect("create again"));
    assert!(repo
        .create_definition_if_absent(&definition(codes::MONTH_WARRIOR, "Month Warrior"))
        .await
        .expect("create second"));

    let found = repo
        .find_definition(&AchievementCode::from_string(codes::FIRST_CHAPTER))
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(found.title(), "First Chapter");

    let missing = repo
        .find_definition(&AchievementCode::from_string("NO_SUCH_BADGE"))
        .await
        .expect("find missing");
    assert!(missing.is_none());

    let all = repo.list_definitions().await.expect("list");
    let listed: Vec<&str> = all.iter().map(|d| d.code().as_str()).collect();
    assert_eq!(listed, vec![codes::FIRST_CHAPTER, codes::MONTH_WARRIOR]);
}

#[tokio::test]
async fn achievement_repo_unlock_is_idempotent_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user = test_helpers::insert_user(&pool, "badges@example.com").await;
    let repo = SqliteAchievementRepository::new(Arc::new(pool.clone()));

    repo.create_definition_if_absent(&definition(codes::FIRST_CHAPTER, "First Chapter"))
        .await
        .expect("seed");

    let code = AchievementCode::from_string(codes::FIRST_CHAPTER);
    let unlock = AchievementUnlock::new(user.id().clone(), code.clone());

    assert!(repo.record_unlock_if_absent(&unlock).await.expect("first unlock"));
    assert!(!repo.record_unlock_if_absent(&unlock).await.expect("second unlock"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_achievements WHERE user_id = ?1")
        .bind(user.id().as_str())
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count, 1);

    let stored = repo
        .find_unlock(user.id(), &code)
        .await
        .expect("find unlock")
        .expect("should exist");
    assert_eq!(stored.unlocked_at, unlock.unlocked_at);

    let other = UserId::from_string("someone@example.com");
    assert!(repo.find_unlock(&other, &code).await.expect("find other").is_none());
}

#[tokio::test]
async fn achievement_repo_list_unlocked_newest_first_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user = test_helpers::insert_user(&pool, "list@example.com").await;
    let repo = SqliteAchievementRepository::new(Arc::new(pool));

    for (code, title) in [
        (codes::FIRST_CHAPTER, "First Chapter"),
        (codes::CONSISTENT_LEARNER, "Consistent Learner"),
    ] {
        repo.create_definition_if_absent(&definition(code, title))
            .await
            .expect("seed");
    }

    let mut first = AchievementUnlock::new(
        user.id().clone(),
        AchievementCode::from_string(codes::FIRST_CHAPTER),
    );
    first.unlocked_at -= chrono::Duration::days(6);
    let second = AchievementUnlock::new(
        user.id().clone(),
        AchievementCode::from_string(codes::CONSISTENT_LEARNER),
    );

    repo.record_unlock_if_absent(&first).await.expect("unlock first");
    repo.record_unlock_if_absent(&second).await.expect("unlock second");

    let unlocked = repo.list_unlocked(user.id()).await.expect("list");
    let titles: Vec<&str> = unlocked.iter().map(|u| u.definition.title()).collect();
    assert_eq!(titles, vec!["Consistent Learner", "First Chapter"]);
    assert_eq!(unlocked[1].unlocked_at, first.unlocked_at);
}

#[tokio::test]
async fn achievement_repo_concurrent_unlocks_insert_once_integration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("race.db");
    let database = Database::with_options(
        db_path.to_str().expect("utf-8 path"),
        4,
        std::time::Duration::from_secs(10),
    )
    .await
    .expect("open db");
    database.run_migrations().await.expect("migrate");

    let pool = database.pool().clone();
    let user = test_helpers::insert_user(&pool, "racer@example.com").await;
    let repo = Arc::new(SqliteAchievementRepository::new(Arc::new(pool.clone())));
    repo.create_definition_if_absent(&definition(codes::CONSISTENT_LEARNER, "Consistent Learner"))
        .await
        .expect("seed");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        let unlock = AchievementUnlock::new(
            user.id().clone(),
            AchievementCode::from_string(codes::CONSISTENT_LEARNER),
        );
        handles.push(tokio::spawn(async move {
            repo.record_unlock_if_absent(&unlock).await
        }));
    }

    let mut inserted = 0;
    for handle in handles {
        if handle.await.expect("join").expect("no storage error") {
            inserted += 1;
        }
    }
    assert_eq!(inserted, 1);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_achievements")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(count, 1);
}
