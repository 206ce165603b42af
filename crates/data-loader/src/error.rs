//! Error types for the data-loader crate.
//!
//! Two families live here:
//! - [`DataLoadError`]: the file as a whole could not be read. Loading stops.
//! - [`FieldError`]: a single cell could not be decoded into the type a caller
//!   asked for. Callers decide whether that is fatal (usually it is not).

use thiserror::Error;

/// Errors that can occur while reading the dataset file
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, ragged record, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record in the data file couldn't be turned into a row
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },

    /// The file has no header row, or the header is blank
    #[error("Missing header row in {path}")]
    MissingHeader { path: String },
}

/// Errors produced when decoding a single cell of a row.
///
/// `Missing` means the row has no such column at all, which is a data-format
/// problem with the whole file. `Empty` and `Malformed` describe one bad cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("row has no column '{column}'")]
    Missing { column: String },

    #[error("column '{column}' is empty")]
    Empty { column: String },

    #[error("column '{column}' has malformed value '{value}': {reason}")]
    Malformed {
        column: String,
        value: String,
        reason: String,
    },
}

impl FieldError {
    pub(crate) fn missing(column: &str) -> Self {
        FieldError::Missing {
            column: column.to_string(),
        }
    }

    pub(crate) fn empty(column: &str) -> Self {
        FieldError::Empty {
            column: column.to_string(),
        }
    }

    pub(crate) fn malformed(column: &str, value: &str, reason: impl Into<String>) -> Self {
        FieldError::Malformed {
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the column itself is absent from the row.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, FieldError::Missing { .. })
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
