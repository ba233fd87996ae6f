//! dropbox-params
//!
//! Typed request parameters for the Dropbox HTTP API.
//!
//! This crate only contains *parameter-level* types: values that know how to
//! render themselves into the JSON fragments embedded in request bodies.
//! Transport, authentication, retries and response decoding live elsewhere.
//!
//! ```rust,ignore
//! use dropbox_params::{Parameter, WriteMode};
//!
//! let mode = WriteMode::update("0123456789abcdef")?;
//! let json = mode.to_json()?;
//! assert_eq!(json[".tag"], "update");
//! ```
#![deny(unsafe_code)]

pub mod encoding;
pub mod error;
pub mod types;

pub use encoding::{JsonEncodeOptions, decode_parameter, encode_parameter_as_json};
pub use error::{ParamError, Result};
pub use types::{Parameter, Revision, WriteMode};
