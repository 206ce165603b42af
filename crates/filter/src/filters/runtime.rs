//! Filter on runtime in minutes ("142 min").

use super::Comparison;
use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies running strictly longer or strictly shorter than a duration.
pub struct RuntimeFilter {
    kind: CriterionKind,
    minutes: u32,
    comparison: Comparison,
}

impl RuntimeFilter {
    pub fn more_than(minutes: u32) -> Self {
        Self {
            kind: CriterionKind::RuntimeMoreThan,
            minutes,
            comparison: Comparison::Above,
        }
    }

    pub fn less_than(minutes: u32) -> Self {
        Self {
            kind: CriterionKind::RuntimeLessThan,
            minutes,
            comparison: Comparison::Below,
        }
    }
}

impl RowPredicate for RuntimeFilter {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        self.kind.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        let minutes = fields::runtime_minutes(row)?;
        Ok(self.comparison.holds(minutes, self.minutes))
    }
}
