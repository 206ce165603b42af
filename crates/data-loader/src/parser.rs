//! CSV reader for the movie dataset.
//!
//! The first record is the header; every following record becomes one
//! [`MovieRow`] keyed by the normalized header names. Cells are trimmed but
//! otherwise kept verbatim, decoding happens later in [`crate::fields`].
//!
//! Bytes that are not valid UTF-8 are replaced rather than rejected, so a
//! stray Latin-1 title does not make the whole file unreadable.

use crate::error::{DataLoadError, Result};
use crate::types::{canonical_column, MovieRow, MovieTable};
use csv::{ByteRecord, ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

/// Read a movie CSV file from disk.
pub fn read_csv(path: &Path) -> Result<MovieTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let table = read_csv_from_reader(file, &path.display().to_string())?;
    info!(
        "Loaded {} rows with {} columns from {}",
        table.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Read movie CSV data from any reader.
///
/// `source` only names the input in error messages.
pub fn read_csv_from_reader<R: Read>(reader: R, source: &str) -> Result<MovieTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| canonical_column(&decode(h)))
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(DataLoadError::MissingHeader {
            path: source.to_string(),
        });
    }
    debug!("CSV header for {}: {:?}", source, headers);

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        rows.push(parse_record(&headers, &record)?);
    }

    Ok(MovieTable::new(headers, rows))
}

fn parse_record(headers: &[String], record: &ByteRecord) -> Result<MovieRow> {
    if record.len() != headers.len() {
        return Err(DataLoadError::ParseError {
            line: record.position().map(|p| p.line()).unwrap_or(0),
            reason: format!(
                "expected {} fields but found {}",
                headers.len(),
                record.len()
            ),
        });
    }

    Ok(headers
        .iter()
        .zip(record.iter())
        .map(|(column, value)| (column.clone(), decode(value)))
        .collect())
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
