//! Error types for the report crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output format string not recognised
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// Top-N criterion not recognised
    #[error("Criteria not accepted: '{0}' (expected highest-rated, most-popular or highest-grossing)")]
    UnknownRanking(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
