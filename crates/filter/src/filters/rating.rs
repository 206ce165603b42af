//! Filter on IMDb rating.

use super::Comparison;
use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies rated strictly above or strictly below a threshold.
pub struct RatingFilter {
    kind: CriterionKind,
    rating: f64,
    comparison: Comparison,
}

impl RatingFilter {
    pub fn above(rating: f64) -> Self {
        Self {
            kind: CriterionKind::RatingAbove,
            rating,
            comparison: Comparison::Above,
        }
    }

    pub fn below(rating: f64) -> Self {
        Self {
            kind: CriterionKind::RatingBelow,
            rating,
            comparison: Comparison::Below,
        }
    }
}

impl RowPredicate for RatingFilter {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        self.kind.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        let rating = fields::imdb_rating(row)?;
        Ok(self.comparison.holds(rating, self.rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rating: &str) -> MovieRow {
        MovieRow::from_pairs([("imdb_rating", rating)])
    }

    #[test]
    fn test_rating_above() {
        let filter = RatingFilter::above(8.0);

        assert!(filter.evaluate(&row("8.1")).unwrap());
        assert!(!filter.evaluate(&row("8.0")).unwrap());
        assert!(!filter.evaluate(&row("7.9")).unwrap());
    }

    #[test]
    fn test_rating_below() {
        let filter = RatingFilter::below(8.0);

        assert!(filter.evaluate(&row("7.9")).unwrap());
        assert!(!filter.evaluate(&row("8")).unwrap());
    }

    #[test]
    fn test_unparseable_rating() {
        let filter = RatingFilter::above(1.0);
        assert!(filter.evaluate(&row("n/a")).is_err());
        assert!(filter.evaluate(&MovieRow::new()).unwrap_err().is_missing_column());
    }
}
