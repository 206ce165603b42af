//! Filter on release year.
//!
//! `released_year` is not always a year: a few rows of the IMDb export hold
//! a certificate ("PG") there. Such rows never satisfy a year criterion.

use super::Comparison;
use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies released strictly after or strictly before a year.
pub struct YearFilter {
    kind: CriterionKind,
    year: i32,
    comparison: Comparison,
}

impl YearFilter {
    /// Released strictly after `year`
    pub fn after(year: i32) -> Self {
        Self {
            kind: CriterionKind::YearAfter,
            year,
            comparison: Comparison::Above,
        }
    }

    /// Released strictly before `year`
    pub fn before(year: i32) -> Self {
        Self {
            kind: CriterionKind::YearBefore,
            year,
            comparison: Comparison::Below,
        }
    }
}

impl RowPredicate for YearFilter {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        self.kind.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        let year = fields::released_year(row)?;
        Ok(self.comparison.holds(year, self.year))
    }
}
