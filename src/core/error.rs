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

    /// JSON (configuration) error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Output sink could not be opened
    #[error("Failed to open log sink '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Another writer already holds the log file
    #[error("Log file '{path}' is already held by another writer")]
    FileLockError { path: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// TAI timestamp text that is not `<seconds>:<nanoseconds>`
    #[error("Invalid TAI timestamp '{input}'")]
    InvalidTimestamp { input: String },

    /// External command exited unsuccessfully
    #[error("Command '{command}' failed: {status}")]
    CommandFailed { command: String, status: String },
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

    /// Create a sink open error
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        LoggerError::InvalidTimestamp {
            input: input.into(),
        }
    }

    pub fn command_failed(command: impl Into<String>, status: impl ToString) -> Self {
        LoggerError::CommandFailed {
            command: command.into(),
            status: status.to_string(),
        }
    }
}
