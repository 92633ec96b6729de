//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout roster.
//! All errors are structured and map to stable error codes.
//!
//! # Error Categories
//! - `ConnectionFailed`: database connection errors
//! - `QueryFailed`: statement execution errors (including constraint violations)
//! - `InvalidInput`: malformed input or an out-of-range selection
//! - `PromptFailed`: the interactive layer could not collect an answer
//! - `ConfigError`: configuration file or resolution errors
//!
//! A zero-affected-rows update is NOT an error; it is a normal result value
//! reported by the query catalog.

use thiserror::Error;

/// Main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Database connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Statement execution failed (includes foreign-key and type constraint
    /// violations rejected by the store)
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// Invalid input or an out-of-range selection index
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The interactive prompt could not be presented or answered
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    /// Configuration error (unreadable file, invalid JSON, unresolvable
    /// environment variable)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RosterError {
    /// Convert error to a stable code string
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
            Self::QueryFailed(_) => "QUERY_FAILED",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::PromptFailed(_) => "PROMPT_FAILED",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Get human-readable error message
    ///
    /// Safe to show to the user; never contains credentials.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed(message.into())
    }

    /// Create a query failed error
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a prompt failed error
    pub fn prompt_failed(message: impl Into<String>) -> Self {
        Self::PromptFailed(message.into())
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterError::connection_failed("test").error_code(), "CONNECTION_FAILED");
        assert_eq!(RosterError::query_failed("test").error_code(), "QUERY_FAILED");
        assert_eq!(RosterError::invalid_input("test").error_code(), "INVALID_INPUT");
        assert_eq!(RosterError::prompt_failed("test").error_code(), "PROMPT_FAILED");
        assert_eq!(RosterError::config_error("test").error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_error_messages() {
        let err = RosterError::query_failed("foreign key constraint fails");
        assert!(err.message().contains("foreign key constraint fails"));

        let err = RosterError::connection_failed("connection refused");
        assert!(err.message().contains("Connection failed"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(RosterError::connection_failed("t"), RosterError::ConnectionFailed(_)));
        assert!(matches!(RosterError::query_failed("t"), RosterError::QueryFailed(_)));
        assert!(matches!(RosterError::invalid_input("t"), RosterError::InvalidInput(_)));
        assert!(matches!(RosterError::prompt_failed("t"), RosterError::PromptFailed(_)));
        assert!(matches!(RosterError::config_error("t"), RosterError::ConfigError(_)));
    }
}
