//! Error types for scope configuration.
//!
//! Queries against a built evaluator never fail; only loading and
//! validating configuration does.

use thiserror::Error;

/// Result type for scope operations.
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Errors that can occur while loading or validating scope configuration.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// Configuration document could not be parsed.
    #[error("Failed to parse scope configuration: {0}")]
    ParseError(String),

    /// Configuration validation failed.
    #[error("Scope validation error: {0}")]
    ValidationError(String),

    /// An entry was rejected by strict validation.
    #[error("Invalid entry '{entry}': {reason}")]
    InvalidEntry { entry: String, reason: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// No scope is registered under the requested name.
    #[error("Scope not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for ScopeError {
    fn from(err: serde_json::Error) -> Self {
        ScopeError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ScopeError {
    fn from(err: serde_yaml::Error) -> Self {
        ScopeError::ParseError(err.to_string())
    }
}
