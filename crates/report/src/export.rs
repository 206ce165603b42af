//! Persist the filtered movies as CSV, JSON or plain text.
//!
//! All three formats carry the same six columns as the printed table.

use crate::error::{ReportError, Result};
use crate::table::{render_movies, MOVIE_HEADERS};
use data_loader::{columns, MovieRow};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Base file name used when the caller does not give one.
pub const DEFAULT_FILE_NAME: &str = "filtered_movies";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    PlainText,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::PlainText => "txt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "plain-text" | "plain" | "txt" => Ok(OutputFormat::PlainText),
            _ => Err(ReportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// One exported movie, keyed by the table headers.
#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Year")]
    year: &'a str,
    #[serde(rename = "Rating")]
    rating: &'a str,
    #[serde(rename = "Genre")]
    genre: &'a str,
    #[serde(rename = "Runtime")]
    runtime: &'a str,
    #[serde(rename = "Director")]
    director: &'a str,
}

impl<'a> From<&'a MovieRow> for ExportRecord<'a> {
    fn from(row: &'a MovieRow) -> Self {
        Self {
            title: row.get_or_empty(columns::TITLE),
            year: row.get_or_empty(columns::RELEASED_YEAR),
            rating: row.get_or_empty(columns::IMDB_RATING),
            genre: row.get_or_empty(columns::GENRE),
            runtime: row.get_or_empty(columns::RUNTIME),
            director: row.get_or_empty(columns::DIRECTOR),
        }
    }
}

/// `<name>.<ext>`, falling back to [`DEFAULT_FILE_NAME`].
///
/// Example: `export_path(None, OutputFormat::Json)` -> `filtered_movies.json`
pub fn export_path(name: Option<&str>, format: OutputFormat) -> PathBuf {
    let name = name.unwrap_or(DEFAULT_FILE_NAME);
    PathBuf::from(format!("{}.{}", name, format.extension()))
}

/// Write `rows` to `path` in the given format.
pub fn save_filtered(rows: &[MovieRow], path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)?;
    write_filtered(rows, BufWriter::new(file), format)?;
    info!("Saved {} movies to {}", rows.len(), path.display());
    Ok(())
}

/// Write `rows` to any writer in the given format.
pub fn write_filtered<W: Write>(rows: &[MovieRow], writer: W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(rows, writer),
        OutputFormat::Json => write_json(rows, writer),
        OutputFormat::PlainText => write_plain(rows, writer),
    }
}

fn write_csv<W: Write>(rows: &[MovieRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // The header is written explicitly so an empty export still has one
    csv_writer.write_record(MOVIE_HEADERS)?;
    for row in rows {
        csv_writer.serialize(ExportRecord::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(rows: &[MovieRow], mut writer: W) -> Result<()> {
    let records: Vec<ExportRecord> = rows.iter().map(ExportRecord::from).collect();

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}

fn write_plain<W: Write>(rows: &[MovieRow], mut writer: W) -> Result<()> {
    writer.write_all(render_movies(rows).as_bytes())?;
    writer.flush()?;
    Ok(())
}
