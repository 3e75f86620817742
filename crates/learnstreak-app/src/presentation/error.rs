use learnstreak_domain::shared::{DomainError, ErrorCode, ErrorSeverity};
use serde::{Deserialize, Serialize};

/// Structured error printed by the CLI on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    /// Numeric error code (2xxx-6xxx range)
    pub code: u16,

    pub message: String,

    pub severity: ErrorSeverity,

    /// Whether retrying the same command may succeed
    pub recoverable: bool,
}

impl CommandError {
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code().code(),
            message: err.message().to_string(),
            severity: err.severity(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DomainError>() {
            Ok(domain) => domain.into(),
            Err(other) => Self::infrastructure(format!("{:#}", other)),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
