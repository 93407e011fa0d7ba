//! Error types for the logger system
//!
//! Dispatch never fails; these errors come from construction paths only
//! (parsing levels and directives, opening file-backed transports).

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Malformed tag-level directive
    #[error("Invalid directive '{directive}': {message}")]
    InvalidDirective { directive: String, message: String },

    /// Environment variable could not be read
    #[error("Environment variable {name}: {message}")]
    EnvVar { name: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(level.into())
    }

    /// Create an invalid directive error
    pub fn directive(directive: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidDirective {
            directive: directive.into(),
            message: message.into(),
        }
    }

    /// Create an environment variable error
    pub fn env_var(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::EnvVar {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }
}
