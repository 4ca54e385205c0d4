//! CSV table rendering - header collection and cell escaping
//!
//! Headers are the union of every row's keys in first-seen order, kept
//! in an [`IndexSet`] so ordering never depends on hash iteration.
//! Every cell is double-quoted regardless of content, with embedded
//! quotes doubled; a missing or null cell renders as `""`.

use crate::expand::ExpandedRow;
use indexmap::IndexSet;
use serde_json::Value;

/// Render the expanded rows as CSV text.
///
/// Header line first, lines joined with a single `\n`, no trailing
/// newline and no BOM.
pub fn build_csv(rows: &[ExpandedRow]) -> String {
    let headers = collect_headers(rows);

    // Headers are wrapped as-is, without quote doubling - only data
    // cells go through the escaper
    let header_line = headers
        .iter()
        .map(|h| format!("\"{h}\""))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header_line);

    for row in rows {
        let line = headers
            .iter()
            .map(|h| escape_cell(row.get(h)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

/// Collect distinct headers in first-seen order: row order, then key
/// order within each row.
fn collect_headers(rows: &[ExpandedRow]) -> IndexSet<String> {
    let mut headers = IndexSet::new();
    for row in rows {
        for key in row.keys() {
            headers.insert(key.clone());
        }
    }
    headers
}

/// Quote one cell, doubling embedded quotes. Absent and null both
/// render as the empty quoted cell `""`.
fn escape_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "\"\"".to_string(),
        Some(value) => {
            let text = display_string(value);
            format!("\"{}\"", text.replace('"', "\"\""))
        }
    }
}

/// Display form of a cell value. Strings render bare (no JSON quoting),
/// numbers canonically. Arrays can reach this point when a row held a
/// second, unexpanded array field; they render comma-joined.
fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}
