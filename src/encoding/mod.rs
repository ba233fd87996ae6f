//! Parameter wire-format encoders.
//!
//! The request layer embeds parameters as JSON fragments in request bodies.
//! This module turns any [`Parameter`](crate::types::Parameter) into those
//! bytes, and decodes them back for callers that need to inspect a body.

pub mod parameter_json;

pub use parameter_json::*;
