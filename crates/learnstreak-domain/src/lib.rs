// Domain layer - Pure business logic
// No dependencies on infrastructure or application layers

pub mod achievement;
pub mod enrollment;
pub mod shared;
pub mod streak;
pub mod user;

// Re-exports for convenience
pub use shared::{DomainError, UserId};
