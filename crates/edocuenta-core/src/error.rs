//! Error types for the edocuenta-core library.
//!
//! Data-quality problems (a label that never occurs, an unparseable table
//! row, an empty page) are modeled as absence, not as errors; only
//! structural schema violations surface through these types.

use thiserror::Error;

/// Main error type for the edocuenta library.
#[derive(Error, Debug)]
pub enum EdocError {
    /// Merge adapter error.
    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the external-source merge adapter.
///
/// A missing or malformed transaction grid is NOT an error (the adapter
/// degrades to a zero-row `transaction_details` group); these variants
/// cover documents whose own structure is of the wrong shape.
#[derive(Error, Debug)]
pub enum MergeError {
    /// A required field of the merged document is missing.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field of the merged document has the wrong JSON type.
    #[error("field {field} is not {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Result type for the edocuenta library.
pub type Result<T> = std::result::Result<T, EdocError>;
