//! The Common Value shared by every format
//!
//! Every adapter loads into and saves from [`Value`], a re-export of
//! `serde_json::Value` built with `preserve_order`, so mapping keys keep
//! their insertion order across conversions.

pub use serde_json::{Map, Number, Value};

/// String form of a scalar leaf, as written into markup text.
///
/// Returns `None` for mappings and sequences, which have no scalar form.
/// Null becomes `null_text`.
pub fn scalar_text(value: &Value, null_text: &str) -> Option<String> {
    match value {
        Value::Null => Some(null_text.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Recursively sort mapping keys, leaving sequence order untouched.
pub fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sorted(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}
