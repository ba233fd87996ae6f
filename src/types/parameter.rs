//! Serializable parameter capability.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ParamError, Result};

/// A value that can be embedded in an API request body.
///
/// The request layer treats absent keys and `null` keys differently, so the
/// encoded form never contains `null` object members: they are dropped by
/// [`strip_absent`] before the value leaves this trait.
///
/// # Example
///
/// ```rust,ignore
/// use dropbox_params::{Parameter, WriteMode};
///
/// let map = WriteMode::overwrite().to_map()?;
/// assert_eq!(map.len(), 1);
/// assert_eq!(map[".tag"], "overwrite");
/// ```
pub trait Parameter: Serialize {
    /// Convert the parameter to its wire JSON
    fn to_json(&self) -> Result<Value> {
        let mut value = serde_json::to_value(self)?;
        strip_absent(&mut value);
        Ok(value)
    }

    /// Convert the parameter to its top-level wire mapping
    fn to_map(&self) -> Result<Map<String, Value>> {
        match self.to_json()? {
            Value::Object(map) => Ok(map),
            other => Err(ParamError::invalid_argument(format!(
                "parameter must encode to a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Remove `null` members from every object in `value`.
///
/// Array elements are kept in place (positions matter), but objects nested
/// inside arrays are stripped too.
pub fn strip_absent(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_absent(v);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                strip_absent(item);
            }
        }
        _ => {}
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
