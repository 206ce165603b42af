//! "Top N" rankings of the filtered movies.

use crate::error::{ReportError, Result};
use crate::table::{descending, render_plain};
use data_loader::{columns, fields, MovieRow};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Default number of movies in a ranking.
pub const DEFAULT_TOP_LIMIT: usize = 10;

const TOP_HEADERS: [&str; 5] = ["Title", "Year", "Rating", "Votes", "Gross"];
const TOP_COLUMNS: [&str; 5] = [
    columns::TITLE,
    columns::RELEASED_YEAR,
    columns::IMDB_RATING,
    columns::NO_OF_VOTES,
    columns::GROSS,
];

/// What a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// IMDb rating, best first
    HighestRated,
    /// Number of votes, most first
    MostPopular,
    /// Gross revenue, highest first; unknown gross counts as 0
    HighestGrossing,
}

impl Ranking {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ranking::HighestRated => "highest-rated",
            Ranking::MostPopular => "most-popular",
            Ranking::HighestGrossing => "highest-grossing",
        }
    }

    /// Sort movies best-first by this ranking (stable).
    pub fn sort(&self, rows: &mut Vec<&MovieRow>) {
        match self {
            Ranking::HighestRated => rows.sort_by(|a, b| {
                descending(&fields::imdb_rating(a).ok(), &fields::imdb_rating(b).ok())
            }),
            Ranking::MostPopular => rows.sort_by(|a, b| {
                descending(&fields::no_of_votes(a).ok(), &fields::no_of_votes(b).ok())
            }),
            Ranking::HighestGrossing => {
                rows.sort_by_key(|row| Reverse(fields::gross(row).unwrap_or(0)))
            }
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ranking {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "highest-rated" => Ok(Ranking::HighestRated),
            "most-popular" => Ok(Ranking::MostPopular),
            "highest-grossing" => Ok(Ranking::HighestGrossing),
            _ => Err(ReportError::UnknownRanking(s.to_string())),
        }
    }
}

/// The first `limit` movies of `rows` under `ranking`.
pub fn top_n<'a>(rows: &'a [MovieRow], ranking: Ranking, limit: usize) -> Vec<&'a MovieRow> {
    let mut ranked: Vec<&MovieRow> = rows.iter().collect();
    ranking.sort(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Heading plus table for a ranking, or a notice when there is nothing to rank.
pub fn render_top(rows: &[MovieRow], ranking: Ranking, limit: usize) -> String {
    if rows.is_empty() {
        return format!(
            "No movies found to generate a top {} list for '{}'.",
            limit, ranking
        );
    }

    let cells: Vec<Vec<String>> = top_n(rows, ranking, limit)
        .into_iter()
        .map(|row| {
            TOP_COLUMNS
                .iter()
                .map(|column| row.get(column).unwrap_or("N/A").to_string())
                .collect()
        })
        .collect();

    format!(
        "Top {} {} Movies:\n{}",
        limit,
        ranking.as_str().replace('-', " "),
        render_plain(&TOP_HEADERS, &cells)
    )
}
