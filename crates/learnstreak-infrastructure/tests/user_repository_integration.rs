use chrono::{Duration, Utc};
use std::sync::Arc;

use learnstreak_domain::shared::UserId;
use learnstreak_domain::streak::StreakState;
use learnstreak_domain::user::{User, UserRepository};
use learnstreak_infrastructure::persistence::repositories::SqliteUserRepository;

mod test_helpers;

#[tokio::test]
async fn user_repo_create_find_and_update_streak_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    let user = User::new("learner@example.com", "Learner".to_string()).expect("user");
    assert!(repo.create_if_absent(&user).await.expect("create"));

    // second create is a no-op and keeps the original name
    let duplicate = User::new("learner@example.com", "Someone Else".to_string()).expect("user");
    assert!(!repo.create_if_absent(&duplicate).await.expect("create again"));

    let fetched = repo
        .find_by_id(user.id())
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(fetched.name(), "Learner");
    assert_eq!(fetched.streak(), &StreakState::empty());

    let last = Utc::now() - Duration::hours(3);
    let start = Utc::now() - Duration::days(4);
    let streak = StreakState::restore(5, 9, Some(last), Some(start));
    assert!(repo.update_streak(user.id(), &streak).await.expect("update"));

    let updated = repo
        .find_by_id(user.id())
        .await
        .expect("find after update")
        .expect("should exist");
    assert_eq!(updated.streak().current_streak(), 5);
    assert_eq!(updated.streak().longest_streak(), 9);
    assert_eq!(updated.streak().last_completion_date(), Some(last));
    assert_eq!(updated.streak().streak_start_date(), Some(start));
}

#[tokio::test]
async fn user_repo_missing_user_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteUserRepository::new(Arc::new(pool));

    let missing = UserId::from_string("nobody@example.com");
    assert!(repo.find_by_id(&missing).await.expect("find").is_none());

    let updated = repo
        .update_streak(&missing, &StreakState::restore(1, 1, Some(Utc::now()), None))
        .await
        .expect("update");
    assert!(!updated);
}

#[tokio::test]
async fn user_repo_rejects_corrupt_counter_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user = test_helpers::insert_user(&pool, "corrupt@example.com").await;

    sqlx::query("UPDATE users SET current_streak = -4 WHERE id = ?1")
        .bind(user.id().as_str())
        .execute(&pool)
        .await
        .expect("corrupt row");

    let repo = SqliteUserRepository::new(Arc::new(pool));
    let result = repo.find_by_id(user.id()).await;
    assert!(matches!(
        result,
        Err(learnstreak_domain::DomainError::DataIntegrity(_))
    ));
}
