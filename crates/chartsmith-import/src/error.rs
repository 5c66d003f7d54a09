// File: crates/chartsmith-import/src/error.rs
// Summary: Error types for tabular import.

use thiserror::Error;

/// Errors that can occur while normalizing raw tabular text. All are
/// recoverable: the caller keeps its prior document and no partial import is
/// ever committed.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Input needs a header row plus at least one data row.
    #[error("too few rows: got {got}, need at least 2")]
    TooFewRows { got: usize },

    /// A data row's cell count disagrees with the header.
    #[error("row {row} has {got} cells but the header has {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// The delimited reader rejected the input.
    #[error("malformed delimited text: {message}")]
    Malformed { message: String },
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Malformed {
            message: err.to_string(),
        }
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::TooFewRows { got: 1 };
        assert_eq!(err.to_string(), "too few rows: got 1, need at least 2");
    }
}
