//! Core trait for the row filter.
//!
//! Every criterion is evaluated by a small predicate implementing
//! [`RowPredicate`]. The [`crate::RowFilter`] owns one boxed predicate per
//! active criterion and ANDs their results for each row.

use data_loader::{FieldError, MovieRow};

/// A pass/fail test applied to one row.
///
/// ## Contract
/// - `Ok(true)` / `Ok(false)`: the row does / does not satisfy the criterion
/// - `Err(FieldError::Missing)`: the row lacks a column listed in `columns()`;
///   the filter treats this as a data-format error
/// - any other `Err`: the cell could not be decoded; the filter treats the
///   row as a non-match and keeps going
///
/// Implementations must not mutate anything; `Send + Sync` lets a filter be
/// shared freely.
pub trait RowPredicate: Send + Sync {
    /// Returns the criterion name (for logging and error messages)
    fn name(&self) -> &str;

    /// Dataset columns this predicate reads
    fn columns(&self) -> &[&'static str];

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError>;
}
