use learnstreak_domain::shared::DomainError;

/// Extension trait mapping storage errors into `DomainError`
pub trait ResultExt<T> {
    /// Convert error to `DomainError::Repository`, prefixed with what was being done.
    /// Usage: `query.execute(pool).await.map_repo_error("Save user")?`
    fn map_repo_error(self, context: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Repository(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_repo_error_keeps_context() {
        let result: Result<(), &str> = Err("database is locked");
        match result.map_repo_error("Save user") {
            Err(DomainError::Repository(msg)) => {
                assert_eq!(msg, "Save user: database is locked")
            }
            _ => panic!("Expected Repository error"),
        }
    }
}
