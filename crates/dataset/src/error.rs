//! Error types for the dataset crate.
//!
//! Loading errors are terminal for a session: the caller shows them in place
//! of the summary table. Range queries on an empty dataset are the only
//! errors raised after a successful load.

use thiserror::Error;

/// Errors that can occur while loading or querying a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The data file does not exist
    #[error("Data file not found: {path}")]
    DataUnavailable { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required column is missing or a value has the wrong type
    ///
    /// `line` is the 1-based line in the source; the header is line 1.
    #[error("Corrupt data at line {line} in {source_name}: {reason}")]
    DataCorrupt {
        source_name: String,
        line: u64,
        reason: String,
    },

    /// Range queries are undefined when no records were loaded
    #[error("Dataset contains no records")]
    EmptyDataset,
}

impl DatasetError {
    pub(crate) fn corrupt(source_name: &str, line: u64, reason: impl Into<String>) -> Self {
        DatasetError::DataCorrupt {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DatasetError>;
