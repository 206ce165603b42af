//! # Report Crate
//!
//! Everything the movie query tool produces from a filtered set of rows.
//!
//! ## Main Components
//!
//! - **table**: sort by rating and render the plain-text movies table
//! - **export**: write the filtered movies as CSV, JSON or plain text
//! - **summary**: aggregate statistics, written to a summary log
//! - **top**: "Top N" rankings by rating, votes or gross
//!
//! ## Example Usage
//!
//! ```ignore
//! use report::{render_movies, save_filtered, sort_by_rating, OutputFormat};
//!
//! sort_by_rating(&mut rows);
//! println!("{}", render_movies(&rows));
//! save_filtered(&rows, Path::new("filtered_movies.json"), OutputFormat::Json)?;
//! ```

pub mod error;
pub mod export;
pub mod summary;
pub mod table;
pub mod top;

pub use error::{ReportError, Result};
pub use export::{export_path, save_filtered, write_filtered, OutputFormat, DEFAULT_FILE_NAME};
pub use summary::{render_summary, write_summary_log, Summary};
pub use table::{render_movies, render_plain, sort_by_rating};
pub use top::{render_top, top_n, Ranking, DEFAULT_TOP_LIMIT};
