//! Plain-text table rendering.
//!
//! Tables are laid out the "plain" way: a header line, then one line per row,
//! columns left-aligned and separated by two spaces, no rules or borders.

use data_loader::{columns, fields, MovieRow};
use std::cmp::Ordering;

/// Headers of the filtered-movies table (and of the exported files).
pub const MOVIE_HEADERS: [&str; 6] = ["Title", "Year", "Rating", "Genre", "Runtime", "Director"];

/// Dataset columns shown under [`MOVIE_HEADERS`], in the same order.
pub const MOVIE_COLUMNS: [&str; 6] = [
    columns::TITLE,
    columns::RELEASED_YEAR,
    columns::IMDB_RATING,
    columns::GENRE,
    columns::RUNTIME,
    columns::DIRECTOR,
];

const COLUMN_GAP: &str = "  ";

/// Descending order for optional keys; `None` sorts after every value.
pub(crate) fn descending<T: PartialOrd>(a: &Option<T>, b: &Option<T>) -> Ordering {
    b.partial_cmp(a).unwrap_or(Ordering::Equal)
}

/// Sort rows by IMDb rating, best first.
///
/// The sort is stable, and rows whose rating cannot be read go last.
pub fn sort_by_rating(rows: &mut [MovieRow]) {
    rows.sort_by(|a, b| {
        descending(&fields::imdb_rating(a).ok(), &fields::imdb_rating(b).ok())
    });
}

/// The six display cells of a movie, in [`MOVIE_HEADERS`] order.
pub fn movie_cells(row: &MovieRow) -> Vec<String> {
    MOVIE_COLUMNS
        .iter()
        .map(|column| row.get_or_empty(column).to_string())
        .collect()
}

/// Render headers and rows of cells as a plain table.
pub fn render_plain<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.as_ref().chars().count())
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&render_line(headers.iter().map(|h| h.as_ref()), &widths));
    for row in rows {
        out.push('\n');
        out.push_str(&render_line(row.iter().map(|c| c.as_str()), &widths));
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

/// Render the filtered movies table, rows in the order given.
pub fn render_movies(rows: &[MovieRow]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(movie_cells).collect();
    render_plain(&MOVIE_HEADERS, &cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: &str) -> MovieRow {
        MovieRow::from_pairs([
            ("title", title),
            ("released_year", "1994"),
            ("imdb_rating", rating),
            ("genre", "Drama"),
            ("runtime", "142 min"),
            ("director", "Frank Darabont"),
        ])
    }

    #[test]
    fn test_render_plain_aligns_columns() {
        let table = render_plain(
            &["Name", "N"],
            &[
                vec!["Heat".to_string(), "1".to_string()],
                vec!["Ronin".to_string(), "12".to_string()],
            ],
        );

        assert_eq!(table, "Name   N\nHeat   1\nRonin  12");
    }

    #[test]
    fn test_sort_by_rating_descending_stable() {
        let mut rows = vec![
            movie("A", "8.1"),
            movie("B", "n/a"),
            movie("C", "9.0"),
            movie("D", "8.1"),
        ];
        sort_by_rating(&mut rows);

        let titles: Vec<&str> = rows.iter().map(|r| r.get_or_empty("title")).collect();
        assert_eq!(titles, vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_render_movies_has_headers() {
        let table = render_movies(&[movie("The Shawshank Redemption", "9.3")]);
        let mut lines = table.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("Title"));
        assert!(header.ends_with("Director"));
        assert!(lines.next().unwrap().contains("Frank Darabont"));
    }
}
