//! Typed decoders for the string encodings used by the dataset.
//!
//! The CSV stores everything as text, and a few columns carry their own
//! little formats:
//! - `released_year`: digits, but some rows hold a certificate such as "PG"
//! - `runtime`: minutes with a unit suffix, e.g. "142 min"
//! - `gross`: comma-grouped dollars, e.g. "28,341,469", often left blank
//! - `genre`: comma-separated list, e.g. "Crime, Drama"
//!
//! The `parse_*` functions work on a raw cell; the row-level functions look the
//! column up first and report [`FieldError::Missing`] when it is absent.

use crate::error::FieldError;
use crate::types::{columns, MovieRow};

type FieldResult<T> = std::result::Result<T, FieldError>;

fn cell<'a>(row: &'a MovieRow, column: &str) -> FieldResult<&'a str> {
    row.get(column).ok_or_else(|| FieldError::missing(column))
}

// =============================================================================
// Cell parsers
// =============================================================================

/// Parse a release year. Only plain ASCII digits are accepted.
///
/// Example: "1994" -> Ok(1994), "PG" -> Err(Malformed)
pub fn parse_year(value: &str) -> FieldResult<i32> {
    let column = columns::RELEASED_YEAR;
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::malformed(column, value, "not a plain number"));
    }
    value
        .parse()
        .map_err(|e| FieldError::malformed(column, value, format!("{}", e)))
}

/// Parse an IMDb rating such as "8.5".
pub fn parse_rating(value: &str) -> FieldResult<f64> {
    let column = columns::IMDB_RATING;
    let rating: f64 = value
        .trim()
        .parse()
        .map_err(|e| FieldError::malformed(column, value, format!("{}", e)))?;
    if !rating.is_finite() {
        return Err(FieldError::malformed(column, value, "not a finite number"));
    }
    Ok(rating)
}

/// Parse a vote count such as "2343110".
pub fn parse_votes(value: &str) -> FieldResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| FieldError::malformed(columns::NO_OF_VOTES, value, format!("{}", e)))
}

/// Parse a runtime, dropping the unit suffix.
///
/// Example: "142 min" -> Ok(142), "142" -> Ok(142), "min" -> Err(Malformed)
pub fn parse_runtime(value: &str) -> FieldResult<u32> {
    let column = columns::RUNTIME;
    let digits = value
        .trim()
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .trim();
    if digits.is_empty() {
        return Err(FieldError::malformed(column, value, "no minutes found"));
    }
    digits
        .parse()
        .map_err(|e| FieldError::malformed(column, value, format!("{}", e)))
}

/// Parse a gross revenue, dropping thousands separators.
///
/// A blank cell is reported as [`FieldError::Empty`] so callers can tell
/// "unknown revenue" apart from a garbled one.
///
/// Example: "28,341,469" -> Ok(28341469), "" -> Err(Empty)
pub fn parse_gross(value: &str) -> FieldResult<u64> {
    let column = columns::GROSS;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::empty(column));
    }
    trimmed
        .replace(',', "")
        .parse()
        .map_err(|e| FieldError::malformed(column, value, format!("{}", e)))
}

/// Split a genre cell into trimmed, lowercased genre names.
///
/// Example: "Action, Adventure,Drama" -> ["action", "adventure", "drama"]
pub fn split_genres(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .collect()
}

// =============================================================================
// Row-level decoders
// =============================================================================

pub fn released_year(row: &MovieRow) -> FieldResult<i32> {
    parse_year(cell(row, columns::RELEASED_YEAR)?)
}

pub fn imdb_rating(row: &MovieRow) -> FieldResult<f64> {
    parse_rating(cell(row, columns::IMDB_RATING)?)
}

pub fn no_of_votes(row: &MovieRow) -> FieldResult<u64> {
    parse_votes(cell(row, columns::NO_OF_VOTES)?)
}

pub fn runtime_minutes(row: &MovieRow) -> FieldResult<u32> {
    parse_runtime(cell(row, columns::RUNTIME)?)
}

pub fn gross(row: &MovieRow) -> FieldResult<u64> {
    parse_gross(cell(row, columns::GROSS)?)
}

pub fn genres(row: &MovieRow) -> FieldResult<Vec<String>> {
    Ok(split_genres(cell(row, columns::GENRE)?))
}

/// The director cell, lowercased for comparison.
pub fn director(row: &MovieRow) -> FieldResult<String> {
    Ok(cell(row, columns::DIRECTOR)?.to_lowercase())
}

/// The four star cells, lowercased, in billing order.
pub fn stars(row: &MovieRow) -> FieldResult<[String; 4]> {
    let [a, b, c, d] = columns::STARS;
    Ok([
        cell(row, a)?.to_lowercase(),
        cell(row, b)?.to_lowercase(),
        cell(row, c)?.to_lowercase(),
        cell(row, d)?.to_lowercase(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1994"), Ok(1994));
        assert!(parse_year("PG").is_err());
        assert!(parse_year("").is_err());
        assert!(parse_year(" 1994").is_err());
        assert!(parse_year("-1994").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("8.5"), Ok(8.5));
        assert_eq!(parse_rating(" 9 "), Ok(9.0));
        assert!(parse_rating("NaN").is_err());
        assert!(parse_rating("great").is_err());
    }

    #[test]
    fn test_parse_runtime() {
        assert_eq!(parse_runtime("142 min"), Ok(142));
        assert_eq!(parse_runtime("90min"), Ok(90));
        assert_eq!(parse_runtime("75"), Ok(75));
        assert!(parse_runtime("min").is_err());
        assert!(parse_runtime("").is_err());
        assert!(parse_runtime("1h 30 min").is_err());
    }

    #[test]
    fn test_parse_gross() {
        assert_eq!(parse_gross("28,341,469"), Ok(28_341_469));
        assert_eq!(parse_gross("0"), Ok(0));
        assert_eq!(
            parse_gross("  "),
            Err(FieldError::Empty {
                column: "gross".to_string()
            })
        );
        assert!(matches!(
            parse_gross("n/a"),
            Err(FieldError::Malformed { .. })
        ));
    }

    #[test]
    fn test_split_genres() {
        assert_eq!(
            split_genres("Action, Adventure,Drama"),
            vec!["action", "adventure", "drama"]
        );
        assert!(split_genres("").is_empty());
    }

    #[test]
    fn test_row_decoders_report_missing_column() {
        let row = MovieRow::from_pairs([("title", "Heat")]);

        let err = released_year(&row).unwrap_err();
        assert!(err.is_missing_column());
        assert!(stars(&row).unwrap_err().is_missing_column());
    }

    #[test]
    fn test_stars_lowercased() {
        let row = MovieRow::from_pairs([
            ("star_1", "Al Pacino"),
            ("star_2", "Robert De Niro"),
            ("star_3", "Val Kilmer"),
            ("star_4", ""),
        ]);

        let stars = stars(&row).unwrap();
        assert_eq!(stars[0], "al pacino");
        assert_eq!(stars[1], "robert de niro");
        assert_eq!(stars[3], "");
    }
}
