//! Core domain types for the movie CSV dataset.
//!
//! A dataset is kept exactly as it was read: every row is a mapping from
//! column name to the raw string found in the file. Typed views (year,
//! rating, runtime...) are decoded on demand by [`crate::fields`], so a
//! malformed cell only matters to the code that actually asks for it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Column Names
// =============================================================================

/// Canonical column names of the movie dataset.
///
/// Headers are normalized on load (see [`canonical_column`]), so these are
/// the only spellings the rest of the workspace needs to know about.
pub mod columns {
    pub const TITLE: &str = "title";
    pub const RELEASED_YEAR: &str = "released_year";
    pub const CERTIFICATE: &str = "certificate";
    pub const RUNTIME: &str = "runtime";
    pub const GENRE: &str = "genre";
    pub const IMDB_RATING: &str = "imdb_rating";
    pub const OVERVIEW: &str = "overview";
    pub const META_SCORE: &str = "meta_score";
    pub const DIRECTOR: &str = "director";
    pub const STAR_1: &str = "star_1";
    pub const STAR_2: &str = "star_2";
    pub const STAR_3: &str = "star_3";
    pub const STAR_4: &str = "star_4";
    pub const NO_OF_VOTES: &str = "no_of_votes";
    pub const GROSS: &str = "gross";
    pub const POSTER_LINK: &str = "poster_link";

    /// The four actor columns, in billing order.
    pub const STARS: [&str; 4] = [STAR_1, STAR_2, STAR_3, STAR_4];
}

/// Map a raw CSV header cell to its canonical column name.
///
/// Headers are trimmed and lowercased. The spellings used by the IMDb
/// "top 1000" export (`Series_Title`, `Star1`..`Star4`) are folded into the
/// canonical names; anything else is kept as-is after lowercasing.
///
/// Example: `" Series_Title "` -> `"title"`, `"Star3"` -> `"star_3"`
pub fn canonical_column(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.as_str() {
        "series_title" => columns::TITLE.to_string(),
        "star1" => columns::STAR_1.to_string(),
        "star2" => columns::STAR_2.to_string(),
        "star3" => columns::STAR_3.to_string(),
        "star4" => columns::STAR_4.to_string(),
        _ => lowered,
    }
}

// =============================================================================
// MovieRow
// =============================================================================

/// One CSV record describing a single movie.
///
/// Rows are never mutated after loading; filters and report producers only
/// borrow the values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRow {
    fields: HashMap<String, String>,
}

impl MovieRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Builds a row from `(column, value)` pairs.
    ///
    /// Handy in tests and for callers that already hold decoded records:
    /// ```ignore
    /// let row = MovieRow::from_pairs([("title", "Heat"), ("released_year", "1995")]);
    /// ```
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Raw value of a column, `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|v| v.as_str())
    }

    /// Raw value of a column, or `""` when the column is absent.
    ///
    /// Report producers use this for display; filters must use [`get`]
    /// (or the decoders in [`crate::fields`]) so a missing column is noticed.
    ///
    /// [`get`]: MovieRow::get
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Sets a column value (used while the row is being read).
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(column, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MovieRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// =============================================================================
// MovieTable
// =============================================================================

/// A whole dataset: the normalized header plus every row, in file order.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    /// Canonical column names in the order they appear in the file
    pub headers: Vec<String>,
    pub rows: Vec<MovieRow>,
}

impl MovieTable {
    pub fn new(headers: Vec<String>, rows: Vec<MovieRow>) -> Self {
        Self { headers, rows }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hand the rows over to the next stage, dropping the header.
    pub fn into_rows(self) -> Vec<MovieRow> {
        self.rows
    }
}
