use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File error on '{path}': {source}")]
    FileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse token '{token}' as a number: {reason}")]
    ParseError { token: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TaskError {
    /// Wraps an I/O error with the path it happened on.
    pub fn file(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        TaskError::FileError {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TaskError::IoError(_) | TaskError::FileError { .. } => ErrorCategory::Io,
            TaskError::ParseError { .. } => ErrorCategory::Parsing,
            TaskError::SerializationError(_) => ErrorCategory::Serialization,
            TaskError::ConfigError { .. }
            | TaskError::ConfigValidationError { .. }
            | TaskError::InvalidConfigValueError { .. }
            | TaskError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Parsing | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TaskError::FileError { source, .. } | TaskError::IoError(source) => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => {
                        "Check that the input file exists and the path is correct"
                    }
                    std::io::ErrorKind::PermissionDenied => {
                        "Check file permissions for the input and output paths"
                    }
                    std::io::ErrorKind::InvalidData => "Make sure the input file is valid UTF-8 text",
                    _ => "Check available disk space and that the paths are accessible",
                }
            }
            TaskError::ParseError { .. } => {
                "Make sure every token in the file is an integer or a decimal number"
            }
            TaskError::SerializationError(_) => "Report this as a bug",
            TaskError::ConfigError { .. } | TaskError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            TaskError::InvalidConfigValueError { .. } | TaskError::MissingConfigError { .. } => {
                "Fix the reported configuration value or command-line argument"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TaskError::FileError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", path),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", path),
                _ => format!("Could not access {}: {}", path, source),
            },
            TaskError::ParseError { token, .. } => format!("'{}' is not a number", token),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

/// Prints a failure for the user and exits with the error's exit code.
///
/// Only writes the user-facing lines; the structured `tracing` record of a
/// task failure comes from `TaskRunner`.
pub fn exit_with(err: &TaskError) -> ! {
    eprintln!("❌ {}", err.user_friendly_message());
    eprintln!("💡 {}", err.recovery_suggestion());

    std::process::exit(err.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_file_is_critical() {
        let err = TaskError::file("missing.txt", io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.user_friendly_message(), "File not found: missing.txt");
        assert!(err.recovery_suggestion().contains("exists"));
    }

    #[test]
    fn test_parse_error_exit_code() {
        let err = TaskError::ParseError {
            token: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Parsing);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            TaskError::IoError(io::Error::new(io::ErrorKind::Other, "x")),
            TaskError::ParseError {
                token: "x".to_string(),
                reason: "y".to_string(),
            },
            TaskError::ConfigError {
                message: "z".to_string(),
            },
        ];

        for err in errors {
            assert_ne!(err.exit_code(), 0, "{err}");
        }
    }

    #[test]
    fn test_config_errors_are_medium() {
        let err = TaskError::MissingConfigError {
            field: "filter.keyword".to_string(),
        };

        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
    }
}
