//! Error handling types for dropbox-params.
//!
//! This module is intentionally dependency-light: parameter construction and
//! encoding are the only fallible operations in the crate.

mod conversions;
pub mod types;

pub use types::*;
