//! JSON body encoders for request parameters.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::Parameter;

/// JSON encoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonEncodeOptions {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for JsonEncodeOptions {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonEncodeOptions {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Encode a parameter into its JSON body fragment.
///
/// Absent (`null`) members are removed before writing.
pub fn encode_parameter_as_json<P: Parameter>(
    param: &P,
    opts: JsonEncodeOptions,
) -> Result<Vec<u8>> {
    let value = param.to_json()?;
    let mut out = Vec::new();
    if opts.pretty {
        serde_json::to_writer_pretty(&mut out, &value)?;
    } else {
        serde_json::to_writer(&mut out, &value)?;
    }
    tracing::debug!(bytes = out.len(), pretty = opts.pretty, "encoded parameter");
    Ok(out)
}

/// Decode a parameter from a JSON body fragment.
///
/// Validation performed by the target type's deserializer (e.g. non-empty
/// revisions) surfaces as [`ParamError::JsonError`](crate::error::ParamError::JsonError).
pub fn decode_parameter<P: DeserializeOwned>(bytes: &[u8]) -> Result<P> {
    Ok(serde_json::from_slice(bytes)?)
}
