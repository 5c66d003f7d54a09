// File: crates/chartsmith-core/src/error.rs
// Summary: Closed error taxonomy for the chart-definition pipeline.

use thiserror::Error;

/// Errors that can occur inside the pipeline. Callers of `compile` never see
/// these; they are aggregated into the fallback spec (or, for mutations, a
/// no-op) before crossing the public boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Assembling a RenderSpec failed for a structural reason.
    #[error("chart assembly failed: {reason}")]
    Compile { reason: String },

    /// A parallel-coordinate record does not match the declared dimensions.
    #[error("record {index} has {got} values but {expected} dimensions are declared")]
    RecordShape {
        index: usize,
        got: usize,
        expected: usize,
    },

    /// A tree path addressed no node. Surfaced as a named no-op, never thrown.
    #[error("path {path:?} does not address a node")]
    PathNotFound { path: Vec<usize> },

    /// Serializing or deserializing a saved chart failed.
    #[error("chart serialization failed: {source}")]
    Codec {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PipelineError::RecordShape {
            index: 3,
            got: 2,
            expected: 4,
        };
        assert_eq!(
            err.to_string(),
            "record 3 has 2 values but 4 dimensions are declared"
        );
    }
}
