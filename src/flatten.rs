//! Object flattening - collapse nested objects into compound keys
//!
//! `{ "a": { "b": 1 } }` becomes `{ "a__b": 1 }`, encoding structural
//! depth into the key name. Arrays are kept intact so the row expander
//! can split them into rows later, and booleans are pre-rendered as the
//! strings `"True"` / `"False"` since CSV has no boolean type.

use serde_json::{Map, Value};

/// Key separator for nested object paths.
pub const KEY_SEPARATOR: &str = "__";

/// A single-level mapping from compound keys to scalar or array values.
///
/// Invariant: no value is ever `Value::Object` - nested objects are
/// fully resolved into compound keys before this type is produced.
pub type FlatRow = Map<String, Value>;

/// Flatten one JSON object into a [`FlatRow`].
///
/// Keys are visited in insertion order. On a compound-key collision the
/// later value wins silently. Total over any object input; non-object
/// top-level values are rejected by [`crate::convert`] before this
/// stage.
pub fn flatten(obj: &Map<String, Value>, prefix: &str) -> FlatRow {
    let mut result = FlatRow::new();
    flatten_into(obj, prefix, &mut result);
    result
}

fn flatten_into(obj: &Map<String, Value>, prefix: &str, result: &mut FlatRow) {
    for (key, value) in obj {
        let flat_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{KEY_SEPARATOR}{key}")
        };

        match value {
            // Kept intact - the expander splits these into rows
            Value::Array(_) => {
                result.insert(flat_key, value.clone());
            }
            Value::Bool(b) => {
                let rendered = if *b { "True" } else { "False" };
                result.insert(flat_key, Value::String(rendered.to_string()));
            }
            Value::Object(nested) => {
                flatten_into(nested, &flat_key, result);
            }
            _ => {
                result.insert(flat_key, value.clone());
            }
        }
    }
}
