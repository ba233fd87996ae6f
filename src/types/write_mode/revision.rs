//! File revision identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParamError, Result};

/// Opaque identifier of a specific version of a file's contents.
///
/// The storage service defines the format; the only local rule is that a
/// revision is never empty. Deserialization enforces the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Revision(String);

impl Revision {
    /// Create a revision, rejecting empty input
    pub fn new(revision: impl Into<String>) -> Result<Self> {
        let revision = revision.into();
        if revision.is_empty() {
            tracing::debug!("rejected empty revision");
            return Err(ParamError::invalid_argument("revision must not be empty"));
        }
        Ok(Self(revision))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Revision {
    type Error = ParamError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Revision {
    type Error = ParamError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Revision {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Revision> for String {
    fn from(value: Revision) -> Self {
        value.0
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
