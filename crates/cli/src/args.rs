//! Command-line flags and their validation.
//!
//! Everything here runs before the dataset is opened, so a bad flag is
//! reported without touching the file.

use clap::Parser;
use movie_filter::{ActiveCriteria, Criterion};
use report::{OutputFormat, Ranking, DEFAULT_TOP_LIMIT};
use std::path::PathBuf;
use thiserror::Error;

/// Oldest release year accepted by the year flags.
pub const MIN_YEAR: i32 = 1900;

/// A flag value that makes the query meaningless.
#[derive(Error, Debug, PartialEq)]
#[error("{0}")]
pub struct ArgumentError(String);

impl ArgumentError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// movie-query - filter a movie CSV dataset
#[derive(Parser, Debug)]
#[command(name = "movie-query")]
#[command(about = "Filter a movie dataset by year, rating, genre, cast and more", long_about = None)]
pub struct Cli {
    /// Path to the movie CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Keep movies released after this year
    #[arg(long)]
    pub year_after: Option<i32>,

    /// Keep movies released before this year
    #[arg(long)]
    pub year_before: Option<i32>,

    /// Keep movies having at least one of these genres
    #[arg(long, num_args = 1..)]
    pub genre: Option<Vec<String>>,

    /// Keep movies with at least this many votes
    #[arg(long, allow_negative_numbers = true)]
    pub votes_min: Option<i64>,

    /// Keep movies with at most this many votes
    #[arg(long, allow_negative_numbers = true)]
    pub votes_max: Option<i64>,

    /// Keep movies rated above this IMDb rating
    #[arg(long, allow_negative_numbers = true)]
    pub rating_above: Option<f64>,

    /// Keep movies rated below this IMDb rating
    #[arg(long, allow_negative_numbers = true)]
    pub rating_below: Option<f64>,

    /// Keep movies by this director: <FIRST> <LAST>
    #[arg(long, num_args = 1..)]
    pub director: Option<Vec<String>>,

    /// Keep movies starring all of these actors (separate names with commas)
    #[arg(long, num_args = 1..)]
    pub actor: Option<Vec<String>>,

    /// Keep movies longer than this many minutes
    #[arg(long, allow_negative_numbers = true)]
    pub runtime_more_than: Option<i64>,

    /// Keep movies shorter than this many minutes
    #[arg(long, allow_negative_numbers = true)]
    pub runtime_less_than: Option<i64>,

    /// Keep movies that grossed at least this many dollars
    #[arg(long, allow_negative_numbers = true)]
    pub gross_min: Option<i64>,

    /// Keep movies that grossed at most this many dollars
    #[arg(long, allow_negative_numbers = true)]
    pub gross_max: Option<i64>,

    /// Export format: json, csv or plain-text
    #[arg(long)]
    pub output_format: Option<String>,

    /// Export file name, without extension
    #[arg(long)]
    pub output_file: Option<String>,

    /// Write a statistical summary of the results to this file
    #[arg(long)]
    pub export_log: Option<PathBuf>,

    /// Print a ranking: highest-rated, most-popular or highest-grossing
    #[arg(long)]
    pub top: Option<String>,

    /// Number of movies in the ranking
    #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
    pub top_limit: usize,
}

/// Where and how to export, once the format string has been resolved.
#[derive(Debug, PartialEq)]
pub struct ExportRequest {
    pub name: Option<String>,
    pub format: OutputFormat,
    /// The format string that was not recognised, if any
    pub unsupported: Option<String>,
}

impl Cli {
    /// Validate the filter flags and turn them into criteria.
    pub fn criteria(&self, current_year: i32) -> Result<ActiveCriteria, ArgumentError> {
        let mut criteria = ActiveCriteria::new();

        if let Some(year) = self.year_after {
            criteria.insert(Criterion::YearAfter(year_in_range("--year-after", year, current_year)?));
        }
        if let Some(year) = self.year_before {
            criteria.insert(Criterion::YearBefore(year_in_range("--year-before", year, current_year)?));
        }
        if let Some(rating) = self.rating_above {
            criteria.insert(Criterion::RatingAbove(rating_in_range("--rating-above", rating)?));
        }
        if let Some(rating) = self.rating_below {
            criteria.insert(Criterion::RatingBelow(rating_in_range("--rating-below", rating)?));
        }
        if let Some(votes) = self.votes_min {
            criteria.insert(Criterion::VotesMin(non_negative("--votes-min", votes)?));
        }
        if let Some(votes) = self.votes_max {
            criteria.insert(Criterion::VotesMax(non_negative("--votes-max", votes)?));
        }
        if let Some(minutes) = self.runtime_more_than {
            criteria.insert(Criterion::RuntimeMoreThan(positive("--runtime-more-than", minutes)?));
        }
        if let Some(minutes) = self.runtime_less_than {
            criteria.insert(Criterion::RuntimeLessThan(positive("--runtime-less-than", minutes)?));
        }
        if let Some(gross) = self.gross_min {
            criteria.insert(Criterion::GrossMin(non_negative("--gross-min", gross)?));
        }
        if let Some(gross) = self.gross_max {
            criteria.insert(Criterion::GrossMax(non_negative("--gross-max", gross)?));
        }
        if let Some(genres) = &self.genre {
            let genre = Criterion::genre(genres.as_slice())
                .map_err(|e| ArgumentError::new(e.to_string()))?;
            criteria.insert(genre);
        }
        if let Some(words) = &self.director {
            if words.len() != 2 {
                return Err(ArgumentError::new(
                    "--director requires exactly two words: <FIRST> <LAST>",
                ));
            }
            let director = Criterion::director(words.as_slice())
                .map_err(|e| ArgumentError::new(e.to_string()))?;
            criteria.insert(director);
        }
        if let Some(words) = &self.actor {
            criteria.insert(
                Criterion::actor(words.as_slice())
                    .map_err(|_| ArgumentError::new("--actor names cannot be empty"))?,
            );
        }

        criteria
            .check_consistency()
            .map_err(|e| ArgumentError::new(e.to_string()))?;
        Ok(criteria)
    }

    /// The requested ranking, if `--top` was given.
    pub fn ranking(&self) -> Result<Option<Ranking>, ArgumentError> {
        if self.top_limit == 0 {
            return Err(ArgumentError::new("--top-limit must be greater than 0"));
        }
        self.top
            .as_deref()
            .map(|raw| raw.parse::<Ranking>())
            .transpose()
            .map_err(|e| ArgumentError::new(e.to_string()))
    }

    /// The export to perform, if `--output-file` or `--output-format` was given.
    ///
    /// An unrecognised format falls back to CSV.
    pub fn export_request(&self) -> Option<ExportRequest> {
        if self.output_file.is_none() && self.output_format.is_none() {
            return None;
        }

        let (format, unsupported) = match self.output_format.as_deref() {
            None => (OutputFormat::default(), None),
            Some(raw) => match raw.parse::<OutputFormat>() {
                Ok(format) => (format, None),
                Err(_) => (OutputFormat::Csv, Some(raw.to_string())),
            },
        };

        Some(ExportRequest {
            name: self.output_file.clone(),
            format,
            unsupported,
        })
    }
}

fn year_in_range(flag: &str, year: i32, current_year: i32) -> Result<i32, ArgumentError> {
    if (MIN_YEAR..=current_year).contains(&year) {
        Ok(year)
    } else {
        Err(ArgumentError::new(format!(
            "{flag} must be between {MIN_YEAR} and {current_year}, got {year}"
        )))
    }
}

fn rating_in_range(flag: &str, rating: f64) -> Result<f64, ArgumentError> {
    if (0.0..=10.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(ArgumentError::new(format!(
            "{flag} must be between 0.0 and 10.0, got {rating}"
        )))
    }
}

fn non_negative(flag: &str, value: i64) -> Result<u64, ArgumentError> {
    u64::try_from(value)
        .map_err(|_| ArgumentError::new(format!("{flag} cannot be negative, got {value}")))
}

fn positive(flag: &str, value: i64) -> Result<u32, ArgumentError> {
    if value <= 0 {
        return Err(ArgumentError::new(format!(
            "{flag} must be greater than 0, got {value}"
        )));
    }
    u32::try_from(value).map_err(|_| ArgumentError::new(format!("{flag} is too large: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_filter::CriterionKind;

    const YEAR: i32 = 2024;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["movie-query", "--input", "movies.csv"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn error(args: &[&str]) -> String {
        parse(args).criteria(YEAR).unwrap_err().to_string()
    }

    #[test]
    fn test_no_flags_means_no_criteria() {
        let cli = parse(&[]);
        assert!(cli.criteria(YEAR).unwrap().is_empty());
        assert_eq!(cli.ranking().unwrap(), None);
        assert_eq!(cli.export_request(), None);
    }

    #[test]
    fn test_every_flag_becomes_a_criterion() {
        let criteria = parse(&[
            "--year-after", "1990",
            "--year-before", "2010",
            "--rating-above", "7.5",
            "--rating-below", "9.5",
            "--votes-min", "0",
            "--votes-max", "3000000",
            "--runtime-more-than", "90",
            "--runtime-less-than", "200",
            "--gross-min", "0",
            "--gross-max", "1000000000",
            "--genre", "Drama", "Crime",
            "--director", "Frank", "Darabont",
            "--actor", "Tim", "Robbins,", "Morgan", "Freeman",
        ])
        .criteria(YEAR)
        .unwrap();

        assert_eq!(criteria.len(), 13);
        assert_eq!(
            criteria.get(CriterionKind::Actor),
            Some(&Criterion::Actor(vec![
                "Tim Robbins".to_string(),
                "Morgan Freeman".to_string()
            ]))
        );
        assert_eq!(
            criteria.get(CriterionKind::VotesMin),
            Some(&Criterion::VotesMin(0))
        );
    }

    #[test]
    fn test_year_range() {
        assert!(error(&["--year-after", "1899"]).contains("--year-after must be between 1900 and 2024"));
        assert!(error(&["--year-before", "2025"]).contains("--year-before"));
        assert!(parse(&["--year-before", "2024"]).criteria(YEAR).is_ok());
    }

    #[test]
    fn test_numeric_ranges() {
        assert!(error(&["--rating-above", "10.5"]).contains("between 0.0 and 10.0"));
        assert!(error(&["--votes-min", "-1"]).contains("--votes-min cannot be negative"));
        assert!(error(&["--gross-max", "-5"]).contains("--gross-max cannot be negative"));
        assert!(error(&["--runtime-less-than", "0"]).contains("must be greater than 0"));
    }

    #[test]
    fn test_director_needs_two_words() {
        assert!(error(&["--director", "Nolan"]).contains("exactly two words"));
        assert!(error(&["--director", "A", "B", "C"]).contains("exactly two words"));
    }

    #[test]
    fn test_empty_actor_name() {
        assert_eq!(
            error(&["--actor", "Tom", "Hanks,", ","]),
            "--actor names cannot be empty"
        );
    }

    #[test]
    fn test_inconsistent_pair() {
        let message = error(&["--year-after", "2010", "--year-before", "2000"]);
        assert!(message.contains("year_after"));
        assert!(message.contains("year_before"));
    }

    #[test]
    fn test_ranking() {
        assert_eq!(
            parse(&["--top", "most-popular"]).ranking().unwrap(),
            Some(Ranking::MostPopular)
        );
        assert!(parse(&["--top", "cheapest"]).ranking().is_err());
        assert!(parse(&["--top", "most-popular", "--top-limit", "0"]).ranking().is_err());
    }

    #[test]
    fn test_export_request() {
        let request = parse(&["--output-format", "json"]).export_request().unwrap();
        assert_eq!(request.format, OutputFormat::Json);
        assert_eq!(request.name, None);

        let request = parse(&["--output-file", "picks"]).export_request().unwrap();
        assert_eq!(request.format, OutputFormat::Csv);
        assert_eq!(request.name.as_deref(), Some("picks"));

        let request = parse(&["--output-format", "xml"]).export_request().unwrap();
        assert_eq!(request.format, OutputFormat::Csv);
        assert_eq!(request.unsupported.as_deref(), Some("xml"));
    }
}
