//! Rendering errors

use thiserror::Error;

/// Failures while reading a rendered value list back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SqlParseError {
    /// Line does not look like an ARRAY row at all.
    #[error("line {line}: malformed row, expected '(ARRAY[..])' form")]
    MalformedRow { line: usize },

    /// Row parsed but carried the wrong number of components.
    #[error("line {line}: expected 4 components, found {count}")]
    FieldCount { line: usize, count: usize },

    /// A component was not an integer in -1..=1.
    #[error("line {line}: invalid component '{value}'")]
    InvalidComponent { line: usize, value: String },

    /// Input ended without a ';' terminated row.
    #[error("missing ';' terminator on final row")]
    MissingTerminator,

    /// A non-empty line followed the ';' terminated row.
    #[error("line {line}: content after terminating row")]
    TrailingContent { line: usize },
}

/// Shorthand for parse results.
pub type ParseResult<T> = Result<T, SqlParseError>;
