//! Errors raised while reading a UI schema

use thiserror::Error;

/// Why raw UI schema text could not be compiled
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The text is not JSON at all
    #[error("UI schema is not valid JSON (line {line}, column {column}): {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },

    /// The document parsed but is not an array of fields
    #[error("UI schema must be a JSON array of fields, found {found}")]
    NotAnArray { found: &'static str },

    /// A top-level array element does not have the field shape
    #[error("UI schema field at index {index} is malformed: {message}")]
    InvalidField { index: usize, message: String },
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
