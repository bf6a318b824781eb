use thiserror::Error;

/// Unified error type for stale branch operations
#[derive(Error, Debug)]
pub enum StaleBranchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command `{command}` failed with exit code {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },

    #[error("Malformed branch record: {0}")]
    MalformedRecord(String),
}

/// Convenience type alias for Results in git-stale-branches
pub type Result<T> = std::result::Result<T, StaleBranchError>;

impl StaleBranchError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StaleBranchError::Config(msg.into())
    }

    /// Create a malformed record error with context
    pub fn malformed(msg: impl Into<String>) -> Self {
        StaleBranchError::MalformedRecord(msg.into())
    }

    /// Process exit status this error should terminate the run with.
    ///
    /// Command failures propagate the underlying tool's status so callers
    /// see exactly what git reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            StaleBranchError::CommandFailed { exit_code, .. } => *exit_code,
            StaleBranchError::Config(_) => 2,
            StaleBranchError::MalformedRecord(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StaleBranchError::config("older-than must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: older-than must be positive"
        );
    }

    #[test]
    fn test_malformed_record_maps_to_one() {
        let err = StaleBranchError::malformed("expected 6 fields, found 2");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_command_failed_propagates_exit_code() {
        let err = StaleBranchError::CommandFailed {
            command: "git fetch --all --quiet --prune".to_string(),
            exit_code: 128,
        };
        assert_eq!(err.exit_code(), 128);
        assert!(err.to_string().contains("git fetch"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (StaleBranchError::config("x"), "Configuration error"),
            (StaleBranchError::malformed("x"), "Malformed branch record"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_config_errors_exit_with_usage_status() {
        assert_eq!(StaleBranchError::config("bad").exit_code(), 2);
    }
}
