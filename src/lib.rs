//! # Flatsheet - JSON to CSV flattening
//!
//! Converts a JSON object or array of objects into flat CSV text
//! suitable for spreadsheet consumption. Nested objects collapse into
//! `parent__child` columns, array-valued fields expand into extra rows,
//! and every cell is quoted.
//!
//! ## Pipeline
//!
//! - **flatten**: nested objects into compound keys
//! - **expand**: array fields into one row per element
//! - **table**: header collection and escaped CSV rendering
//!
//! Each stage is a pure function; a whole conversion is one call with
//! no shared state, safe to run concurrently from independent callers.
//!
//! ## Quick start
//!
//! ```rust
//! use flatsheet::convert;
//!
//! let csv = convert(r#"[{"id": 1, "name": "Joe", "active": true}]"#)?;
//! assert_eq!(csv, "\"id\",\"name\",\"active\"\n\"1\",\"Joe\",\"True\"");
//! # Ok::<(), flatsheet::ConvertError>(())
//! ```

use serde_json::Value;

pub mod error;
pub mod expand;
pub mod flatten;
pub mod table;

pub use error::ConvertError;
pub use expand::{expand, ExpandedRow};
pub use flatten::{flatten, FlatRow, KEY_SEPARATOR};
pub use table::build_csv;

/// Convert raw JSON text into CSV text.
///
/// The input must parse as a JSON object or an array of objects; a lone
/// object is treated as a one-element array. All error conditions are
/// detected before the pipeline runs, so no partial output is ever
/// produced.
pub fn convert(raw: &str) -> Result<String, ConvertError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let parsed: Value =
        serde_json::from_str(trimmed).map_err(|e| ConvertError::InvalidJson(e.to_string()))?;

    // Normalise: wrap a single object in a one-element array
    let records = match parsed {
        Value::Array(items) => items,
        Value::Object(_) => vec![parsed],
        _ => return Err(ConvertError::UnsupportedShape),
    };

    if records.is_empty() {
        return Err(ConvertError::EmptyArray);
    }

    let rows: Vec<ExpandedRow> = records
        .iter()
        .map(|record| match record {
            Value::Object(obj) => flatten(obj, ""),
            // A non-object element flattens to no columns at all and
            // renders as an all-blank line
            _ => FlatRow::new(),
        })
        .flat_map(expand)
        .collect();

    Ok(build_csv(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_object_end_to_end() {
        let csv = convert(r#"[{"id":1,"name":"Joe","active":true}]"#).unwrap();
        assert_eq!(csv, "\"id\",\"name\",\"active\"\n\"1\",\"Joe\",\"True\"");
    }

    #[test]
    fn test_lone_object_matches_one_element_array() {
        assert_eq!(
            convert(r#"{"x":1}"#).unwrap(),
            convert(r#"[{"x":1}]"#).unwrap()
        );
    }

    #[test]
    fn test_nested_object_becomes_compound_column() {
        let csv = convert(r#"{"user":{"name":"A","age":3}}"#).unwrap();
        assert_eq!(csv, "\"user__name\",\"user__age\"\n\"A\",\"3\"");
    }

    #[test]
    fn test_array_field_expands_into_rows() {
        let csv = convert(r#"{"id":1,"tags":["a","b"]}"#).unwrap();
        assert_eq!(csv, "\"id\",\"tags\"\n\"1\",\"a\"\n\"\",\"b\"");
    }

    #[test]
    fn test_object_array_expands_with_compound_columns() {
        let csv = convert(r#"{"id":1,"users":[{"name":"A"},{"name":"B"}]}"#).unwrap();
        assert_eq!(csv, "\"id\",\"users__name\"\n\"1\",\"A\"\n\"\",\"B\"");
    }

    #[test]
    fn test_header_union_across_records() {
        let csv = convert(r#"[{"a":1,"b":2},{"b":3,"c":4}]"#).unwrap();
        assert_eq!(csv, "\"a\",\"b\",\"c\"\n\"1\",\"2\",\"\"\n\"\",\"3\",\"4\"");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(convert(""), Err(ConvertError::EmptyInput));
        assert_eq!(convert("   \n\t "), Err(ConvertError::EmptyInput));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = convert("{not json").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidJson(_)));
        assert!(err.to_string().starts_with("invalid JSON: "));
    }

    #[test]
    fn test_scalar_top_level_is_rejected() {
        assert_eq!(convert("42"), Err(ConvertError::UnsupportedShape));
        assert_eq!(convert(r#""hello""#), Err(ConvertError::UnsupportedShape));
        assert_eq!(convert("null"), Err(ConvertError::UnsupportedShape));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert_eq!(convert("[]"), Err(ConvertError::EmptyArray));
        assert_eq!(convert(" [ ] "), Err(ConvertError::EmptyArray));
    }

    #[test]
    fn test_empty_array_field_drops_its_record() {
        // The record with the empty array contributes no data rows; its
        // scalar fields are lost. Kept for output compatibility.
        let csv = convert(r#"[{"id":1,"tags":[]},{"id":2}]"#).unwrap();
        assert_eq!(csv, "\"id\"\n\"2\"");
    }

    #[test]
    fn test_non_object_array_element_renders_blank_line() {
        let csv = convert(r#"[{"a":1},42]"#).unwrap();
        assert_eq!(csv, "\"a\"\n\"1\"\n\"\"");
    }

    #[test]
    fn test_quotes_in_one_cell_leave_others_alone() {
        let csv = convert(r#"[{"msg":"He said \"hi\"","other":"plain"}]"#).unwrap();
        assert_eq!(csv, "\"msg\",\"other\"\n\"He said \"\"hi\"\"\",\"plain\"");
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        assert_eq!(
            ConvertError::EmptyInput.to_string(),
            "input is empty - nothing to convert"
        );
        assert_eq!(
            ConvertError::UnsupportedShape.to_string(),
            "top-level JSON must be an object or an array of objects"
        );
        assert_eq!(
            ConvertError::EmptyArray.to_string(),
            "the JSON array is empty - nothing to convert"
        );
    }
}
