//! Core error type.

use thiserror::Error;

/// Errors produced while building or encoding request parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A constructor argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl ParamError {
    /// Shorthand for [`ParamError::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this error was raised by argument validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, ParamError>;
