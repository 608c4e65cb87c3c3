//! Error types and handling for the CLI
//!
//! The core library never fails; every error here originates at the shell
//! boundary (terminal I/O, user input, configuration files).

use std::io;
use std::num::ParseIntError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (terminal reads and writes, config files)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A numeric prompt received something that is not an integer
    #[error("Invalid {field}: '{input}' is not a whole number of gigabytes")]
    InputFormat {
        field: &'static str,
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Menu answer other than the listed options
    #[error("Invalid option '{choice}': expected 1 or 2")]
    InvalidChoice { choice: String },

    /// Input ended while a prompt was waiting for an answer
    #[error("Input closed while waiting for: {}", prompt.trim_end())]
    InputClosed { prompt: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Config(_) => 5,
            Self::InputFormat { .. } => 6,
            Self::InvalidChoice { .. } => 7,
            Self::InputClosed { .. } => 8,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Whether another attempt at the same prompt could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InputFormat { .. } | Self::InvalidChoice { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
