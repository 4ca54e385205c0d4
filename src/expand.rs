//! Row expansion - split array-valued fields into extra rows
//!
//! A flattened row that still holds an array becomes one row per array
//! element, with the other columns left blank on the extra rows:
//!
//! ```text
//! { id: 1, tags: ["a","b"] }  ->  [{ id: 1, tags: "a" }, { tags: "b" }]
//! ```
//!
//! Only the first array field found (in key order) is expanded, and the
//! resulting rows are never re-expanded. Both limits are deliberate,
//! reproduced from the behaviour this converter replaces; do not widen
//! them to a cartesian expansion.

use crate::flatten::{flatten, FlatRow};
use serde_json::{Map, Value};

/// A row whose expanded array field holds only scalars.
///
/// A second array field in the same row may survive untouched; the
/// table builder renders such leftovers as comma-joined text.
pub type ExpandedRow = FlatRow;

/// Expand one flattened row into one or more table rows.
///
/// Rows without an array field pass through unchanged. An empty array
/// yields zero rows, silently dropping the row's scalar fields - a
/// sharp edge callers must be aware of, kept for output compatibility.
pub fn expand(row: FlatRow) -> Vec<ExpandedRow> {
    let array_key = row
        .iter()
        .find(|(_, v)| v.is_array())
        .map(|(k, _)| k.clone());

    let Some(array_key) = array_key else {
        return vec![row];
    };

    let mut rest = row;
    let Some(Value::Array(array_values)) = rest.shift_remove(&array_key) else {
        unreachable!("key was found holding an array");
    };

    let contains_objects = matches!(array_values.first(), Some(Value::Object(_)));

    array_values
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let item_data = if contains_objects {
                // e.g. users__name, users__age, ...
                flatten_element(item, &array_key)
            } else {
                let mut single = ExpandedRow::new();
                single.insert(array_key.clone(), item);
                single
            };

            if index == 0 {
                // First row carries all the scalar fields
                let mut merged = rest.clone();
                for (key, value) in item_data {
                    merged.insert(key, value);
                }
                merged
            } else {
                item_data
            }
        })
        .collect()
}

/// Flatten one element of an object-first array under the array key.
///
/// Every element takes this path once the first element is an object,
/// even when a later element is not. Non-objects flatten through their
/// enumerable entries: strings and arrays yield indexed `arrayKey__0`,
/// `arrayKey__1`, ... keys, and numbers, booleans and null have no
/// entries at all, so they contribute a blank row. A bare `arrayKey`
/// cell is never emitted on this path.
fn flatten_element(item: Value, prefix: &str) -> ExpandedRow {
    match item {
        Value::Object(obj) => flatten(&obj, prefix),
        Value::String(s) => {
            let entries: Map<String, Value> = s
                .chars()
                .enumerate()
                .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
                .collect();
            flatten(&entries, prefix)
        }
        Value::Array(items) => {
            let entries: Map<String, Value> = items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect();
            flatten(&entries, prefix)
        }
        _ => ExpandedRow::new(),
    }
}
