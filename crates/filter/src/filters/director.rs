//! Filter on director name.

use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies whose director is exactly "first last", ignoring case.
///
/// The whole name is compared as a unit: "Christopher Nolan" does not match
/// a row directed by "Christopher Nolan Jr.".
pub struct DirectorFilter {
    full_name: String,
}

impl DirectorFilter {
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            full_name: format!("{} {}", first.to_lowercase(), last.to_lowercase()),
        }
    }
}

impl RowPredicate for DirectorFilter {
    fn name(&self) -> &str {
        CriterionKind::Director.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        CriterionKind::Director.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        Ok(fields::director(row)? == self.full_name)
    }
}
