#![allow(dead_code)]

use std::sync::Arc;

use learnstreak_domain::user::{User, UserRepository};
use learnstreak_infrastructure::persistence::repositories::SqliteUserRepository;
use learnstreak_infrastructure::persistence::Database;
use sqlx::SqlitePool;

/// Fresh in-memory database with migrations applied
pub async fn setup_in_memory_db() -> SqlitePool {
    let database = Database::in_memory().await.expect("open in-memory db");
    database.run_migrations().await.expect("run migrations");
    database.pool().clone()
}

/// Insert a user so foreign keys on `user_id` are satisfied
pub async fn insert_user(pool: &SqlitePool, email: &str) -> User {
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));
    let user = User::new(email, "Test Learner".to_string()).expect("valid user");
    repo.create_if_absent(&user).await.expect("insert user");
    user
}
