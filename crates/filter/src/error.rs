//! Error types for the movie-filter crate.
//!
//! Only problems with the criteria themselves, or with the shape of the
//! dataset, are errors. A single unparseable cell is not: the row simply does
//! not match (see [`crate::RowFilter`]).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// The caller named a criterion this crate does not know
    #[error("unknown criterion '{0}'")]
    UnknownCriterion(String),

    /// The criterion is known but its value has the wrong shape
    #[error("invalid value for criterion '{criterion}': {reason}")]
    InvalidCriterion { criterion: String, reason: String },

    /// Two criteria contradict each other (e.g. year_after >= year_before)
    #[error("criteria '{first}' and '{second}' are inconsistent: {reason}")]
    Inconsistent {
        first: &'static str,
        second: &'static str,
        reason: String,
    },

    /// A criterion needs a column the dataset does not have
    #[error("criterion '{criterion}' needs column '{column}', which the dataset does not have")]
    MissingColumn { criterion: String, column: String },

    /// One row lacks a column that an active criterion reads
    #[error("row {row} has no column '{column}' (required by criterion '{criterion}')")]
    MissingField {
        row: usize,
        criterion: String,
        column: String,
    },
}

impl FilterError {
    pub(crate) fn invalid(criterion: &str, reason: impl Into<String>) -> Self {
        FilterError::InvalidCriterion {
            criterion: criterion.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
