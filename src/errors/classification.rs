use super::types::SimcheckError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl SimcheckError {
    /// Classify this error to pick the process exit code reported by the CLI.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            SimcheckError::Usage(_) => ErrorClassification {
                error_type: "UsageError",
                exit_code: 2,
            },
            SimcheckError::Config(_)
            | SimcheckError::Pattern(_)
            | SimcheckError::Yaml(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 3,
            },
            SimcheckError::Input(_) => ErrorClassification {
                error_type: "InputError",
                exit_code: 4,
            },
            SimcheckError::Output(_) => ErrorClassification {
                error_type: "OutputError",
                exit_code: 5,
            },
            SimcheckError::InvalidScore { .. }
            | SimcheckError::ScoreOutOfRange(_) => ErrorClassification {
                error_type: "InvalidScoreError",
                exit_code: 1,
            },
            SimcheckError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            SimcheckError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            SimcheckError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
            },
        }
    }
}
