//! Filter to keep only movies in at least one of the requested genres.

use crate::criteria::CriterionKind;
use crate::traits::RowPredicate;
use data_loader::{fields, FieldError, MovieRow};

/// Keeps movies tagged with any of the requested genres.
///
/// ## Algorithm
/// 1. Lowercase and trim the requested genres once, up front
/// 2. Split the row's comma-separated `genre` cell into lowercased names
/// 3. Keep the row if the two lists share at least one genre
pub struct GenreFilter {
    wanted: Vec<String>,
}

impl GenreFilter {
    pub fn new<S: AsRef<str>>(genres: &[S]) -> Self {
        Self {
            wanted: genres
                .iter()
                .map(|g| g.as_ref().trim().to_lowercase())
                .collect(),
        }
    }
}

impl RowPredicate for GenreFilter {
    fn name(&self) -> &str {
        CriterionKind::Genre.as_str()
    }

    fn columns(&self) -> &[&'static str] {
        CriterionKind::Genre.columns()
    }

    fn evaluate(&self, row: &MovieRow) -> Result<bool, FieldError> {
        let genres = fields::genres(row)?;
        Ok(genres.iter().any(|genre| self.wanted.contains(genre)))
    }
}
