//! Unified error types for the langsheet library.
//!
//! All fallible operations across the grid sources, the codec and the
//! catalog writer surface this single error type, presenting a consistent
//! API to users.
use thiserror::Error;

/// Main error type for langsheet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No header row was produced by the grid source before it was exhausted
    #[error("No header row found")]
    MissingHeader,

    /// The delimited-text parser failed
    #[error("Encountered an error when parsing csv: {0}")]
    SourceParse(String),

    /// Parsing the exported grid yielded zero rows
    #[error("No rows found after parsing csv")]
    EmptySource,

    /// The exported grid payload was not text
    #[error("Type of exported sheet is different than text: {0}")]
    SourceExportType(String),

    /// A grid source collaborator (range reader, exporter) failed
    #[error("Grid source error: {0}")]
    Source(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for langsheet operations.
pub type Result<T> = std::result::Result<T, Error>;
