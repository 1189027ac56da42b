//! Common type definitions and the application-wide error type.

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, AocError>;

/// Boxed error used as the `source` of wrapped failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum AocError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure talking to an HTTP endpoint.
    #[error("Network error: {message}")]
    Network {
        /// What was being attempted.
        message: String,
        /// Underlying transport error.
        #[source]
        source: Option<BoxError>,
    },

    /// The Advent of Code API answered, but not with a usable leaderboard.
    #[error("Advent of Code API error: {message}")]
    AdventOfCode {
        /// Human readable description.
        message: String,
        /// HTTP status returned by the API, if any.
        status_code: Option<u16>,
    },

    /// Invalid user or configuration input.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// Offending field, if known.
        field: Option<String>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AocError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error wrapping a transport failure.
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an Advent of Code API error carrying the HTTP status.
    pub fn advent_of_code_with_status(msg: impl Into<String>, status_code: u16) -> Self {
        Self::AdventOfCode {
            message: msg.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a validation error for a named field.
    pub fn validation(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// HTTP status code associated with this error, if there is one.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::AdventOfCode { status_code, .. } => *status_code,
            _ => None,
        }
    }
}
