//! Upload conflict policy.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Revision;
use crate::error::Result;
use crate::types::Parameter;

/// What to do if the upload target already exists. The default is `Add`.
///
/// The write mode states your intent when writing a file to a path and
/// decides what counts as a conflict and how the file is renamed when
/// autorename is enabled. Some cases never depend on the mode:
///
/// - an empty target path is always written, no conflict;
/// - a folder at the target path is always a conflict;
/// - a file with identical contents is left alone, no conflict.
///
/// The modes only differ when a file with *different* contents already
/// exists at the target path.
///
/// # Examples
///
/// ```rust,ignore
/// use dropbox_params::{Parameter, WriteMode};
///
/// // Keep both files
/// let mode = WriteMode::add();
///
/// // Replace whatever is there
/// let mode = WriteMode::overwrite();
///
/// // Replace only the revision we last saw
/// let mode = WriteMode::update("0123456789abcdef")?;
/// assert_eq!(mode.revision(), Some("0123456789abcdef"));
/// ```
///
/// # Wire format
///
/// - `{".tag": "add"}`
/// - `{".tag": "overwrite"}`
/// - `{".tag": "update", "update": "<rev>"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "lowercase")]
pub enum WriteMode {
    /// Never overwrite the existing file.
    ///
    /// On conflict a number is appended to the file name, e.g.
    /// `document.txt` becomes `document (2).txt`.
    #[default]
    Add,

    /// Always overwrite the existing file.
    ///
    /// Autorename behaves as for `Add`.
    Overwrite,

    /// Overwrite only if `revision` matches the existing file's revision.
    ///
    /// On conflict "conflicted copy" is appended to the file name, e.g.
    /// `document (conflicted copy).txt`.
    Update {
        #[serde(rename = "update")]
        revision: Revision,
    },
}

impl WriteMode {
    /// Discriminator key of the wire mapping
    pub const TAG_KEY: &'static str = ".tag";
    /// Key holding the revision of an `Update`
    pub const UPDATE_KEY: &'static str = "update";

    pub const TAG_ADD: &'static str = "add";
    pub const TAG_OVERWRITE: &'static str = "overwrite";
    pub const TAG_UPDATE: &'static str = "update";

    pub fn add() -> Self {
        Self::Add
    }

    pub fn overwrite() -> Self {
        Self::Overwrite
    }

    /// Create a conditional write for `revision`.
    ///
    /// Fails with [`ParamError::InvalidArgument`](crate::error::ParamError::InvalidArgument)
    /// when the revision is empty.
    pub fn update(revision: impl Into<String>) -> Result<Self> {
        Ok(Self::Update {
            revision: Revision::new(revision)?,
        })
    }

    /// The `.tag` value of this mode
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Add => Self::TAG_ADD,
            Self::Overwrite => Self::TAG_OVERWRITE,
            Self::Update { .. } => Self::TAG_UPDATE,
        }
    }

    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add)
    }

    pub fn is_overwrite(&self) -> bool {
        matches!(self, Self::Overwrite)
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// Get the expected revision if this is an `Update`
    pub fn revision(&self) -> Option<&str> {
        match self {
            Self::Update { revision } => Some(revision.as_str()),
            _ => None,
        }
    }
}

impl From<Revision> for WriteMode {
    fn from(revision: Revision) -> Self {
        Self::Update { revision }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update { revision } => write!(f, "update({revision})"),
            other => f.write_str(other.tag()),
        }
    }
}

impl Parameter for WriteMode {}
