//! Parameter Type Definitions
//!
//! Request parameters are grouped by the API area they belong to. Every type
//! implements [`Parameter`], which renders it into the JSON fragment the
//! request builder embeds in a request body.
//!
//! ## Module Organization
//!
//! - **`parameter`** - The `Parameter` capability and absent-key stripping
//! - **`write_mode/`** - Upload conflict policy (`WriteMode`) and `Revision`
//!
//! ## Usage Guidelines
//!
//! Types are re-exported at the module root:
//!
//! ```rust,ignore
//! use dropbox_params::types::{Parameter, WriteMode};
//! ```

pub mod parameter;
pub mod write_mode;

pub use parameter::*;
pub use write_mode::*;
