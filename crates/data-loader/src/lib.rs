//! # Data Loader Crate
//!
//! This crate reads the flat movie CSV dataset into memory.
//!
//! ## Main Components
//!
//! - **types**: Row and table types plus the canonical column names
//! - **parser**: Read a CSV file (or any reader) into a [`MovieTable`]
//! - **fields**: Decode the per-column string encodings (year, runtime, gross...)
//! - **error**: Error types for loading and decoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{read_csv, fields, columns};
//! use std::path::Path;
//!
//! let table = read_csv(Path::new("data/imdb_top_1000.csv"))?;
//! for row in &table.rows {
//!     let title = row.get_or_empty(columns::TITLE);
//!     match fields::runtime_minutes(row) {
//!         Ok(minutes) => println!("{title}: {minutes} min"),
//!         Err(e) => println!("{title}: {e}"),
//!     }
//! }
//! ```

pub mod error;
pub mod fields;
pub mod parser;
pub mod types;

pub use error::{DataLoadError, FieldError, Result};
pub use parser::{read_csv, read_csv_from_reader};
pub use types::{canonical_column, columns, MovieRow, MovieTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_creation() {
        let table = MovieTable::default();
        assert!(table.is_empty());
        assert!(!table.has_column(columns::TITLE));
    }

    #[test]
    fn test_table_into_rows() {
        let rows = vec![
            MovieRow::from_pairs([(columns::TITLE, "Heat")]),
            MovieRow::from_pairs([(columns::TITLE, "Ronin")]),
        ];
        let table = MovieTable::new(vec![columns::TITLE.to_string()], rows.clone());

        assert_eq!(table.len(), 2);
        assert!(table.has_column(columns::TITLE));
        assert_eq!(table.into_rows(), rows);
    }
}
