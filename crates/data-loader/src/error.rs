//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading contest datasets.
///
/// A failed load is fatal for that dataset selection: no partially parsed
/// dataset is ever handed to the pipeline.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Contest manifest could not be parsed
    #[error("malformed manifest {path}: {reason}")]
    ManifestError { path: String, reason: String },

    /// Requested contest is not listed in the catalog
    #[error("unknown contest: {label}")]
    UnknownContest { label: String },

    /// Header row is missing a required column
    #[error("missing column {column} in {file}")]
    MissingColumn { file: String, column: &'static str },

    /// Row in a results file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Dataset integrity check failed
    #[error("validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
