/// E2E Test: learner journey against a migrated in-memory database
///
/// 1. Provision user
/// 2. Enroll (first enrollment badge)
/// 3. Complete chapters over consecutive days
/// 4. Verify streak summary and unlocked list
use chrono::{DateTime, TimeZone, Utc};

use learnstreak_domain::achievement::{codes, UnlockStatus};
use learnstreak_domain::shared::DomainError;
use learnstreak_infrastructure::persistence::Database;
use learnstreak_lib::application::dtos::EnrollOutcomeDto;
use learnstreak_lib::presentation::cli::{Command, UserArgs};
use learnstreak_lib::presentation::commands::execute;
use learnstreak_lib::{assemble, AppState};

const EMAIL: &str = "ada@example.com";
const COURSE: &str = "course-rust-101";

async fn setup() -> AppState {
    let database = Database::in_memory().await.expect("in-memory database");
    assemble(database).await.expect("assemble app state")
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn e2e_learning_streak_flow() {
    let state = setup().await;

    // ============================================================
    // Step 1: Provision user
    // ============================================================
    let user = state
        .services
        .user
        .ensure_user(EMAIL, "Ada")
        .await
        .expect("ensure user");
    assert!(user.created);

    // ============================================================
    // Step 2: Enroll
    // ============================================================
    let outcome = state
        .services
        .enrollment
        .enroll(EMAIL, COURSE)
        .await
        .expect("enroll");
    match outcome {
        EnrollOutcomeDto::Enrolled {
            is_first_course,
            unlocks,
            ..
        } => {
            assert!(is_first_course);
            assert_eq!(unlocks.len(), 1);
            assert_eq!(unlocks[0].code, codes::FIRST_COURSE_ENROLLED);
            assert_eq!(unlocks[0].status, UnlockStatus::NewlyUnlocked);
        }
        other => panic!("expected Enrolled, got {:?}", other),
    }

    let duplicate = state
        .services
        .enrollment
        .enroll(EMAIL, COURSE)
        .await
        .expect("enroll again");
    assert!(matches!(duplicate, EnrollOutcomeDto::AlreadyEnrolled { .. }));

    // ============================================================
    // Step 3: Seven consecutive days of chapters
    // ============================================================
    let first = state
        .services
        .learning_progress
        .complete_chapter_at(EMAIL, COURSE, vec![1], day(1))
        .await
        .expect("day 1");
    let streak = first.streak.clone().expect("streak evaluated");
    assert_eq!((streak.current_streak, streak.longest_streak), (1, 1));
    assert!(!streak.is_new_record);
    assert_eq!(first.unlocks[0].code, codes::FIRST_CHAPTER);
    assert_eq!(first.unlocks[0].status, UnlockStatus::NewlyUnlocked);

    let mut last = first;
    for d in 2..=7 {
        last = state
            .services
            .learning_progress
            .complete_chapter_at(EMAIL, COURSE, (1..=d).collect(), day(d))
            .await
            .expect("consecutive day");
    }

    let streak = last.streak.expect("streak evaluated");
    assert_eq!(streak.current_streak, 7);
    assert_eq!(streak.longest_streak, 7);
    assert!(streak.is_new_record);
    assert_eq!(last.unlocks.len(), 1);
    assert_eq!(last.unlocks[0].code, codes::CONSISTENT_LEARNER);
    assert_eq!(last.unlocks[0].status, UnlockStatus::NewlyUnlocked);
    assert_eq!(last.enrollment.completed_chapters, (1..=7).collect::<Vec<u32>>());

    // ============================================================
    // Step 4: Read side
    // ============================================================
    let summary = state
        .queries
        .streak
        .get_streak_summary(EMAIL)
        .await
        .expect("summary");
    assert_eq!(summary.current_streak, 7);
    assert_eq!(summary.longest_streak, 7);
    assert_eq!(summary.streak_start_date, Some(day(1).to_rfc3339()));
    assert!(!summary.completed_today);

    let unlocked = state
        .queries
        .achievement
        .list_unlocked(EMAIL)
        .await
        .expect("unlocked");
    let unlocked_codes: Vec<&str> = unlocked.iter().map(|u| u.code.as_str()).collect();
    assert_eq!(
        unlocked_codes,
        vec![
            codes::CONSISTENT_LEARNER,
            codes::FIRST_CHAPTER,
            codes::FIRST_COURSE_ENROLLED
        ]
    );
}

#[tokio::test]
async fn e2e_catalog_is_seeded_once() {
    let state = setup().await;

    let catalog = execute(&state, Command::Catalog).await.expect("catalog");
    assert_eq!(catalog.as_array().map(Vec::len), Some(7));

    let reseed = execute(&state, Command::Seed).await.expect("seed");
    assert_eq!(reseed["seeded"], 0);
    assert_eq!(reseed["catalog_size"], 7);
}

#[tokio::test]
async fn e2e_unknown_user_reads_as_empty() {
    let state = setup().await;

    let summary = execute(
        &state,
        Command::Streak(UserArgs {
            user: "nobody@example.com".to_string(),
        }),
    )
    .await
    .expect("streak summary");
    assert_eq!(summary["current_streak"], 0);
    assert_eq!(summary["completed_today"], false);

    let evaluation = state
        .services
        .streak
        .evaluate_streak("nobody@example.com")
        .await
        .expect("evaluate");
    assert!(evaluation.is_none());
}

#[tokio::test]
async fn e2e_storage_failure_propagates() {
    let state = setup().await;
    state
        .services
        .user
        .ensure_user(EMAIL, "Ada")
        .await
        .expect("ensure user");

    state.runtime.pool.close().await;

    let result = state.services.streak.evaluate_streak(EMAIL).await;
    assert!(matches!(result, Err(DomainError::Repository(_))));

    let result = state
        .services
        .achievement
        .unlock_achievement(EMAIL, codes::FIRST_CHAPTER)
        .await;
    assert!(matches!(result, Err(DomainError::Repository(_))));
}

#[tokio::test]
async fn e2e_padded_email_is_one_learner() {
    let state = setup().await;
    let padded = " ada@example.com ";

    state
        .services
        .user
        .ensure_user(padded, "Ada")
        .await
        .expect("ensure user");

    let outcome = state
        .services
        .enrollment
        .enroll(padded, COURSE)
        .await
        .expect("enroll");
    assert!(matches!(outcome, EnrollOutcomeDto::Enrolled { .. }));

    let completion = state
        .services
        .learning_progress
        .complete_chapter_at(padded, COURSE, vec![1], day(1))
        .await
        .expect("complete chapter");
    assert!(completion.streak.is_some());

    let unlock = state
        .services
        .achievement
        .unlock_achievement(padded, codes::MONTH_WARRIOR)
        .await
        .expect("unlock");
    assert_eq!(unlock.status, UnlockStatus::NewlyUnlocked);

    let summary = state
        .queries
        .streak
        .get_streak_summary(padded)
        .await
        .expect("summary");
    assert_eq!(summary.user_id, EMAIL);
    assert_eq!(summary.current_streak, 1);

    let unlocked = state
        .queries
        .achievement
        .list_unlocked(EMAIL)
        .await
        .expect("unlocked");
    assert_eq!(unlocked.len(), 3);
}
