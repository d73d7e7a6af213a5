//! Dataset error types
//!
//! File-level failures while loading the games table. Row-level problems are
//! not errors: they are counted in the load report and the row is dropped.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The CSV file could not be opened
    #[error("Failed to open dataset {path:?}: {error}")]
    Open { path: PathBuf, error: String },

    /// The header row could not be read
    #[error("Failed to read CSV header: {0}")]
    Header(String),

    /// A column the dashboard relies on is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Any other CSV failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
