//! Type Conversions for ParamError
//!
//! From implementations for common error types.

use super::types::ParamError;

impl From<serde_json::Error> for ParamError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
