//! The RowFilter applies every active criterion to every row.
//!
//! It owns one predicate per criterion (built through the registry) and keeps
//! a row only when all of them pass. Rows come out in the order they went in.

use crate::criteria::ActiveCriteria;
use crate::error::{FilterError, Result};
use crate::registry::predicate_for;
use crate::traits::RowPredicate;
use data_loader::{FieldError, MovieRow};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Combines the predicates of an [`ActiveCriteria`] set into one row filter.
///
/// ## Usage
/// ```ignore
/// let criteria = ActiveCriteria::new()
///     .with(Criterion::YearAfter(2000))
///     .with(Criterion::genre(&["Drama"])?);
///
/// let filter = RowFilter::new(&criteria)?;
/// filter.check_columns(table.headers.iter().map(String::as_str))?;
/// let matching = filter.apply(table.into_rows())?;
/// ```
pub struct RowFilter {
    predicates: Vec<Box<dyn RowPredicate>>,
}

impl RowFilter {
    /// Build the filter for a set of criteria.
    ///
    /// Fails if the criteria contradict each other; nothing is evaluated yet.
    pub fn new(criteria: &ActiveCriteria) -> Result<Self> {
        criteria.check_consistency()?;

        let predicates = criteria.iter().map(predicate_for).collect();
        debug!(
            "Built row filter from {} criteria: [{}]",
            criteria.len(),
            criteria
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self { predicates })
    }

    /// A filter with no predicates; every row passes.
    pub fn empty() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add a predicate (builder pattern).
    pub fn add_predicate(mut self, predicate: impl RowPredicate + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Make sure the dataset has every column an active criterion reads.
    ///
    /// Call this with the CSV header before scanning, so a criterion that can
    /// never be evaluated is reported once instead of on every row.
    pub fn check_columns<'a, I>(&self, available: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let available: HashSet<&str> = available.into_iter().collect();
        for predicate in &self.predicates {
            if let Some(column) = predicate
                .columns()
                .iter()
                .find(|column| !available.contains(**column))
            {
                return Err(FilterError::MissingColumn {
                    criterion: predicate.name().to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Keep the rows that satisfy every predicate, in input order.
    ///
    /// ## Algorithm
    /// 1. Check the first row's columns against the predicates (fail fast)
    /// 2. For each row, make sure every required column is present
    /// 3. Evaluate the predicates in turn, stopping at the first failure
    /// 4. A cell that cannot be decoded counts as a failure for that row only
    pub fn apply(&self, rows: Vec<MovieRow>) -> Result<Vec<MovieRow>> {
        if self.predicates.is_empty() {
            debug!("No criteria given, keeping all {} rows", rows.len());
            return Ok(rows);
        }

        if let Some(first) = rows.first() {
            self.check_columns(first.iter().map(|(column, _)| column))?;
        }

        let total = rows.len();
        let mut rejected_by = vec![0usize; self.predicates.len()];
        let mut kept = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            self.require_columns(row_number, &row)?;

            match self.first_failure(row_number, &row)? {
                None => kept.push(row),
                Some(position) => rejected_by[position] += 1,
            }
        }

        for (predicate, rejected) in self.predicates.iter().zip(&rejected_by) {
            debug!("Criterion {} rejected {} rows", predicate.name(), rejected);
        }
        debug!("Row filter kept {} of {} rows", kept.len(), total);

        Ok(kept)
    }

    fn require_columns(&self, row_number: usize, row: &MovieRow) -> Result<()> {
        for predicate in &self.predicates {
            if let Some(column) = predicate
                .columns()
                .iter()
                .find(|column| !row.contains_column(column))
            {
                return Err(FilterError::MissingField {
                    row: row_number,
                    criterion: predicate.name().to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Index of the first predicate the row fails, `None` if it passes all.
    fn first_failure(&self, row_number: usize, row: &MovieRow) -> Result<Option<usize>> {
        for (position, predicate) in self.predicates.iter().enumerate() {
            let passed = match predicate.evaluate(row) {
                Ok(passed) => passed,
                Err(FieldError::Missing { column }) => {
                    return Err(FilterError::MissingField {
                        row: row_number,
                        criterion: predicate.name().to_string(),
                        column,
                    });
                }
                Err(e) => {
                    trace!(
                        "Row {} fails {} closed: {}",
                        row_number,
                        predicate.name(),
                        e
                    );
                    false
                }
            };
            if !passed {
                return Ok(Some(position));
            }
        }
        Ok(None)
    }
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::empty()
    }
}

/// Filter `rows` by `criteria` in one call.
pub fn filter(rows: Vec<MovieRow>, criteria: &ActiveCriteria) -> Result<Vec<MovieRow>> {
    RowFilter::new(criteria)?.apply(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Criterion;
    use crate::filters::YearFilter;

    fn movie(title: &str, year: &str) -> MovieRow {
        MovieRow::from_pairs([("title", title), ("released_year", year)])
    }

    #[test]
    fn test_empty_filter() {
        let filter = RowFilter::empty();
        let rows = vec![movie("A", "2001"), movie("B", "PG")];

        let filtered = filter.apply(rows.clone()).unwrap();
        assert_eq!(filtered, rows);
    }

    #[test]
    fn test_single_predicate() {
        let filter = RowFilter::empty().add_predicate(YearFilter::after(2000));

        let rows = vec![movie("A", "2001"), movie("B", "1999"), movie("C", "PG")];

        let filtered = filter.apply(rows).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].get("title"), Some("A"));
    }

    #[test]
    fn test_inconsistent_criteria_fail_before_scanning() {
        let criteria = ActiveCriteria::new()
            .with(Criterion::YearAfter(2010))
            .with(Criterion::YearBefore(2000));

        assert!(matches!(
            RowFilter::new(&criteria),
            Err(FilterError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_check_columns_names_the_criterion() {
        let criteria = ActiveCriteria::new().with(Criterion::GrossMin(1));
        let filter = RowFilter::new(&criteria).unwrap();

        let err = filter.check_columns(["title", "released_year"]).unwrap_err();
        assert_eq!(
            err,
            FilterError::MissingColumn {
                criterion: "gross_min".to_string(),
                column: "gross".to_string(),
            }
        );
        assert!(filter.check_columns(["title", "gross"]).is_ok());
    }

    #[test]
    fn test_missing_column_in_first_row_fails_fast() {
        let criteria = ActiveCriteria::new().with(Criterion::VotesMin(1));
        let err = filter(vec![movie("A", "2001")], &criteria).unwrap_err();
        assert!(matches!(err, FilterError::MissingColumn { .. }));
    }

    #[test]
    fn test_missing_column_in_later_row_is_reported() {
        let criteria = ActiveCriteria::new().with(Criterion::YearAfter(2000));
        let rows = vec![movie("A", "2001"), MovieRow::from_pairs([("title", "B")])];

        let err = filter(rows, &criteria).unwrap_err();
        assert_eq!(
            err,
            FilterError::MissingField {
                row: 2,
                criterion: "year_after".to_string(),
                column: "released_year".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_cell_fails_closed() {
        let criteria = ActiveCriteria::new().with(Criterion::YearBefore(2020));
        let rows = vec![movie("A", "PG"), movie("B", "2001"), movie("C", "")];

        let filtered = filter(rows, &criteria).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].get("title"), Some("B"));
    }
}
