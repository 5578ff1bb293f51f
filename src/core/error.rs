//! Error types for the logging facade
//!
//! Log calls themselves never return these: a failing concrete logger reports
//! on stderr and the caller carries on. Errors surface only from setup paths
//! such as name lookup, configuration parsing, installation and flushing.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Severity name outside the fixed vocabulary
    #[error("Invalid severity name: '{0}'")]
    InvalidLevelName(String),

    /// Raw severity value that names no severity
    #[error("Invalid severity value: {0}")]
    InvalidLevelValue(u8),

    /// Binary payload longer than the facade accepts
    #[error("Binary payload too large: {len} bytes exceeds the {max} byte limit")]
    PayloadTooLarge { len: usize, max: usize },

    /// A logger is already installed in the registry
    #[error("A logger is already installed")]
    AlreadyInstalled,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

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

    /// File logger error with path
    #[error("File logger error for '{path}': {message}")]
    FileLoggerError { path: String, message: String },

    /// File rotation error
    #[error("File rotation failed for '{path}': {message}")]
    FileRotationError { path: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an invalid severity name error
    pub fn invalid_level_name(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevelName(name.into())
    }

    pub fn payload_too_large(len: usize, max: usize) -> Self {
        LoggerError::PayloadTooLarge { len, max }
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

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file logger error
    pub fn file_logger(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileLoggerError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file rotation error
    pub fn file_rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileRotationError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
