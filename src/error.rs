use thiserror::Error;

/// Errors reported before the conversion pipeline runs.
///
/// All four are detected up front; once the pipeline starts it cannot
/// fail, so a caller never sees partial CSV alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input was empty or whitespace-only.
    #[error("input is empty - nothing to convert")]
    EmptyInput,

    /// Input failed to parse as JSON; carries the parser's message.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Parsed value was neither an object nor an array.
    #[error("top-level JSON must be an object or an array of objects")]
    UnsupportedShape,

    /// Parsed value was an array with zero elements.
    #[error("the JSON array is empty - nothing to convert")]
    EmptyArray,
}
