//! Statistical summary of the filtered movies.

use crate::error::Result;
use data_loader::{fields, MovieRow};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Text written when no movie survived the filters.
pub const EMPTY_SUMMARY: &str = "No movies matched the specified filters.";

/// Aggregate statistics over a set of movies.
///
/// Rating and runtime statistics only count rows whose cell could be decoded,
/// so they are `None` when no row had a usable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_movies: usize,
    pub avg_rating: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub avg_runtime: Option<f64>,
}

impl Summary {
    /// Compute the summary, or `None` for an empty set of rows.
    pub fn compute(rows: &[MovieRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let ratings: Vec<f64> = rows
            .iter()
            .filter_map(|row| fields::imdb_rating(row).ok())
            .collect();
        let runtimes: Vec<f64> = rows
            .iter()
            .filter_map(|row| fields::runtime_minutes(row).ok())
            .map(f64::from)
            .collect();

        Some(Self {
            total_movies: rows.len(),
            avg_rating: mean(&ratings),
            min_rating: ratings.iter().copied().reduce(f64::min),
            max_rating: ratings.iter().copied().reduce(f64::max),
            avg_runtime: mean(&runtimes),
        })
    }

    pub fn render(&self) -> String {
        format!(
            "Summary of Filtered Movies:\n\
             Total Movies: {}\n\
             Average IMDb Rating: {}\n\
             Minimum IMDb Rating: {}\n\
             Maximum IMDb Rating: {}\n\
             Average Runtime: {} minutes\n",
            self.total_movies,
            show(self.avg_rating, 2),
            show(self.min_rating, 1),
            show(self.max_rating, 1),
            show(self.avg_runtime, 2),
        )
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn show(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "n/a".to_string(),
    }
}

/// The summary text for `rows`, including the empty-result notice.
pub fn render_summary(rows: &[MovieRow]) -> String {
    match Summary::compute(rows) {
        Some(summary) => summary.render(),
        None => EMPTY_SUMMARY.to_string(),
    }
}

/// Write the summary of `rows` to `path`, replacing any existing file.
pub fn write_summary_log(rows: &[MovieRow], path: &Path) -> Result<()> {
    fs::write(path, render_summary(rows))?;
    info!("Summary log for {} movies written to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn movie(rating: &str, runtime: &str) -> MovieRow {
        MovieRow::from_pairs([("imdb_rating", rating), ("runtime", runtime)])
    }

    #[test]
    fn test_summary_statistics() {
        let rows = vec![
            movie("9.3", "142 min"),
            movie("9.0", "152 min"),
            movie("7.6", "140 min"),
        ];

        let summary = Summary::compute(&rows).unwrap();
        assert_eq!(summary.total_movies, 3);
        assert!((summary.avg_rating.unwrap() - 8.633).abs() < 0.001);
        assert_eq!(summary.min_rating, Some(7.6));
        assert_eq!(summary.max_rating, Some(9.3));
        assert!((summary.avg_runtime.unwrap() - 144.667).abs() < 0.001);

        let text = summary.render();
        assert!(text.contains("Total Movies: 3\n"));
        assert!(text.contains("Average IMDb Rating: 8.63\n"));
        assert!(text.contains("Minimum IMDb Rating: 7.6\n"));
        assert!(text.contains("Maximum IMDb Rating: 9.3\n"));
        assert!(text.contains("Average Runtime: 144.67 minutes\n"));
    }

    #[test]
    fn test_summary_skips_unreadable_cells() {
        let rows = vec![movie("8.0", "100 min"), movie("n/a", "")];

        let summary = Summary::compute(&rows).unwrap();
        assert_eq!(summary.total_movies, 2);
        assert_eq!(summary.avg_rating, Some(8.0));
        assert_eq!(summary.avg_runtime, Some(100.0));
    }

    #[test]
    fn test_empty_summary() {
        assert!(Summary::compute(&[]).is_none());
        assert_eq!(render_summary(&[]), EMPTY_SUMMARY);
    }

    #[test]
    fn test_write_summary_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("movie_summary_log.txt");

        write_summary_log(&[movie("8.5", "120 min")], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Summary of Filtered Movies:"));
        assert!(text.contains("Average Runtime: 120.00 minutes"));
    }
}
