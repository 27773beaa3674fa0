use thiserror::Error;

/// Errors raised while constructing a data-set snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataSetError {
    #[error("point {point} has {got} coordinates, data set declares {expected}")]
    DimensionMismatch {
        point: usize,
        got: usize,
        expected: usize,
    },
    #[error("sequence {sequence} references point {point}, data set has {point_count} points")]
    SequenceIndexOutOfRange {
        sequence: usize,
        point: usize,
        point_count: usize,
    },
}

/// Errors raised while parsing or validating a style configuration.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to parse style config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}
