use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

// Users are keyed by their email address, so `UserId::new()` is only
// meaningful in tests.
define_id!(UserId);
define_id!(CourseId);
define_id!(EnrollmentId);

impl UserId {
    /// Id for an email as entered by a caller.
    ///
    /// Every path that turns caller input into a `UserId` goes through here so
    /// provisioning and later lookups agree on the key.
    pub fn from_email(email: &str) -> Self {
        Self::from_string(email.trim())
    }
}

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    UserNotFound = 2001,
    EnrollmentNotFound = 2002,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4002,
    SerializationError = 4003,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    ConfigurationError = 5002,

    // Validation (6xxx)
    ValidationError = 6001,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::UserNotFound
            | ErrorCode::EnrollmentNotFound
            | ErrorCode::ValidationError => ErrorSeverity::Info,

            ErrorCode::DataIntegrityError
            | ErrorCode::InfrastructureError
            | ErrorCode::ConfigurationError => ErrorSeverity::Error,

            _ => ErrorSeverity::Warning,
        }
    }

    /// Check if error is recoverable
    ///
    /// Storage failures are reported as recoverable so the caller can decide
    /// whether to retry; nothing in this workspace retries on its own.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::RepositoryError)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Enrollment not found: {0}")]
    EnrollmentNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::UserNotFound(_) => ErrorCode::UserNotFound,
            DomainError::EnrollmentNotFound(_) => ErrorCode::EnrollmentNotFound,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Configuration(_) => ErrorCode::ConfigurationError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::UserNotFound(msg)
            | DomainError::EnrollmentNotFound(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Configuration(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::Serialization(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_code() {
        let err = DomainError::Repository("disk I/O error".to_string());
        assert_eq!(err.format_with_code(), "[4001] Repository error: disk I/O error");
        assert_eq!(err.message(), "disk I/O error");
    }

    #[test]
    fn test_storage_failure_is_recoverable() {
        assert!(DomainError::Repository("locked".to_string()).is_recoverable());
        assert!(!DomainError::Validation("bad".to_string()).is_recoverable());
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            DomainError::UserNotFound("a@b.c".to_string()).severity(),
            ErrorSeverity::Info
        );
        assert_eq!(
            DomainError::Infrastructure("pool closed".to_string()).severity(),
            ErrorSeverity::Error
        );
        assert_eq!(
            DomainError::Repository("locked".to_string()).severity(),
            ErrorSeverity::Warning
        );
    }

    #[test]
    fn test_every_variant_has_a_distinct_code() {
        let errors = [
            DomainError::UserNotFound(String::new()),
            DomainError::EnrollmentNotFound(String::new()),
            DomainError::Repository(String::new()),
            DomainError::DataIntegrity(String::new()),
            DomainError::Serialization(String::new()),
            DomainError::Infrastructure(String::new()),
            DomainError::Configuration(String::new()),
            DomainError::Validation(String::new()),
        ];
        let codes: Vec<u16> = errors.iter().map(|e| e.code().code()).collect();
        assert_eq!(codes, vec![2001, 2002, 4001, 4002, 4003, 5001, 5002, 6001]);
    }

    #[test]
    fn test_user_id_from_email_trims_padding() {
        assert_eq!(
            UserId::from_email("  learner@example.com\t"),
            UserId::from_string("learner@example.com")
        );
    }

    #[test]
    fn test_id_round_trips_through_string() {
        let id = UserId::from_string("learner@example.com");
        assert_eq!(id.as_str(), "learner@example.com");
        assert_eq!(id.to_string(), "learner@example.com");
    }
}
