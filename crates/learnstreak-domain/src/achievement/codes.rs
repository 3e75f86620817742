//! Codes the rule table can emit, plus catalog-only badges.
//!
//! The strings are persisted in `achievements.code` and must never change.

pub const FIRST_COURSE_ENROLLED: &str = "FIRST_COURSE_ENROLLED";
pub const FIRST_CHAPTER: &str = "FIRST_CHAPTER";
pub const CONSISTENT_LEARNER: &str = "CONSISTENT_LEARNER";
pub const CONSISTENT_LEARNER_X2: &str = "CONSISTENT_LEARNER_X2";
pub const MONTH_WARRIOR: &str = "MONTH_WARRIOR";

// Present in the catalog, no rule awards them yet
pub const FIRST_COURSE_CREATED: &str = "FIRST_COURSE_CREATED";
pub const FIRST_COURSE_COMPLETED: &str = "FIRST_COURSE_COMPLETED";
