//! Filter on gross revenue ("28,341,469").
//!
//! Many rows leave `gross` blank. A blank gross never satisfies a gross
//! criterion, whatever the bound, so `gross_min = 0` still drops them.

use super::Comparison;
use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies whose gross is at least / at most a bound (inclusive).
pub struct GrossFilter {
    kind: CriterionKind,
    gross: u64,
    comparison: Comparison,
}

impl GrossFilter {
    pub fn min(gross: u64) -> Self {
        Self {
            kind: CriterionKind::GrossMin,
            gross,
            comparison: Comparison::AtLeast,
        }
    }

    pub fn max(gross: u64) -> Self {
        Self {
            kind: CriterionKind::GrossMax,
            gross,
            comparison: Comparison::AtMost,
        }
    }
}

impl RowPredicate for GrossFilter {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        self.kind.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        match fields::gross(row) {
            Ok(gross) => Ok(self.comparison.holds(gross, self.gross)),
            Err(FieldError::Empty { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(gross: &str) -> MovieRow {
        MovieRow::from_pairs([("gross", gross)])
    }

    #[test]
    fn test_gross_min() {
        let filter = GrossFilter::min(1_000_000);

        assert!(filter.evaluate(&row("1,000,000")).unwrap());
        assert!(filter.evaluate(&row("534,858,444")).unwrap());
        assert!(!filter.evaluate(&row("999,999")).unwrap());
    }

    #[test]
    fn test_gross_max() {
        let filter = GrossFilter::max(1_000_000);

        assert!(filter.evaluate(&row("1,000,000")).unwrap());
        assert!(!filter.evaluate(&row("1,000,001")).unwrap());
    }

    #[test]
    fn test_empty_gross_never_matches() {
        assert!(!GrossFilter::min(0).evaluate(&row("")).unwrap());
        assert!(!GrossFilter::max(u64::MAX).evaluate(&row("")).unwrap());
    }

    #[test]
    fn test_garbled_gross_is_malformed() {
        assert!(GrossFilter::min(0).evaluate(&row("$12M")).is_err());
    }
}
