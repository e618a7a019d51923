//! Key-wise "raw over default" merging for annotation objects.
//!
//! The structured corpus omits keys freely: a consensus may be just `{"s": 5}`.
//! Every span kind is rebuilt by starting from its full default object and
//! overwriting only the keys present in the raw object. Defaults are applied
//! first, never after, so a present key always wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Merge `raw` over `default`. Objects merge key by key (recursively for
/// nested objects); any other raw value replaces the default outright.
pub fn merge_over_default(default: &Value, raw: &Value) -> Value {
    match (default, raw) {
        (Value::Object(base), Value::Object(over)) => {
            let mut merged = base.clone();
            for (key, value) in over {
                let next = match merged.get(key) {
                    Some(d) => merge_over_default(d, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (_, raw) => raw.clone(),
    }
}

/// Typed entry point: overlay a raw JSON object onto `default` and decode the
/// result. `what` names the object in error messages.
pub fn overlay<T>(default: &T, raw: &Value, what: &str) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    if !raw.is_object() {
        return Err(Error::Malformed(format!(
            "{what}: expected an object, found {}",
            json_kind(raw)
        )));
    }
    let base = serde_json::to_value(default)?;
    serde_json::from_value(merge_over_default(&base, raw))
        .map_err(|e| Error::Malformed(format!("{what}: {e}")))
}

pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}
