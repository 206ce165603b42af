//! Filter on number of votes.

use super::Comparison;
use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies whose vote count is at least / at most a bound (inclusive).
pub struct VotesFilter {
    kind: CriterionKind,
    votes: u64,
    comparison: Comparison,
}

impl VotesFilter {
    pub fn min(votes: u64) -> Self {
        Self {
            kind: CriterionKind::VotesMin,
            votes,
            comparison: Comparison::AtLeast,
        }
    }

    pub fn max(votes: u64) -> Self {
        Self {
            kind: CriterionKind::VotesMax,
            votes,
            comparison: Comparison::AtMost,
        }
    }
}

impl RowPredicate for VotesFilter {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        self.kind.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        let votes = fields::no_of_votes(row)?;
        Ok(self.comparison.holds(votes, self.votes))
    }
}
