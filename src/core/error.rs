//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
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

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File destination configured without a path
    #[error("Invalid configuration for output: file destination for level '{level}' has no path")]
    MissingFilePath { level: String },

    /// Named serializer not present in the registry
    #[error("Missing serializer: '{name}'")]
    SerializerNotFound { name: String },
}

impl LoggerError {
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

    pub fn missing_file_path(level: impl Into<String>) -> Self {
        LoggerError::MissingFilePath {
            level: level.into(),
        }
    }

    pub fn serializer_not_found(name: impl Into<String>) -> Self {
        LoggerError::SerializerNotFound { name: name.into() }
    }

    /// True for every error caused by a bad configuration, whether it was
    /// detected at `set_config` time or on the first write.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. } | LoggerError::MissingFilePath { .. }
        )
    }
}
