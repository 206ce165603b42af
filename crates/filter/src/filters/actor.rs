//! Filter to keep only movies starring every requested actor.

use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies whose four star columns include all requested actors.
///
/// Names are compared whole and case-insensitively; "Tom" does not match
/// "Tom Hanks".
pub struct ActorFilter {
    names: Vec<String>,
}

impl ActorFilter {
    /// `names` holds one full actor name per entry (see `Criterion::actor`).
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names
                .iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .collect(),
        }
    }
}

impl RowPredicate for ActorFilter {
    fn name(&self) -> &str {
        CriterionKind::Actor.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        CriterionKind::Actor.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        let stars = fields::stars(row)?;
        Ok(self.names.iter().all(|name| stars.contains(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(stars: [&str; 4]) -> MovieRow {
        MovieRow::from_pairs([
            ("star_1", stars[0]),
            ("star_2", stars[1]),
            ("star_3", stars[2]),
            ("star_4", stars[3]),
        ])
    }

    #[test]
    fn test_actor_and_semantics() {
        let movie = row(["A", "B", "C", "D"]);

        assert!(ActorFilter::new(&["A", "C"]).evaluate(&movie).unwrap());
        assert!(!ActorFilter::new(&["A", "E"]).evaluate(&movie).unwrap());
    }

    #[test]
    fn test_actor_names_are_whole_and_case_insensitive() {
        let movie = row(["Tom Hanks", "Robin Wright", "Gary Sinise", "Sally Field"]);

        assert!(ActorFilter::new(&["tom hanks"]).evaluate(&movie).unwrap());
        assert!(!ActorFilter::new(&["Tom"]).evaluate(&movie).unwrap());
    }

    #[test]
    fn test_missing_star_column() {
        let movie = MovieRow::from_pairs([("star_1", "A"), ("star_2", "B")]);
        let err = ActorFilter::new(&["A"]).evaluate(&movie).unwrap_err();
        assert!(err.is_missing_column());
    }
}
