//! Frame error types.

use crate::model::DType;
use thiserror::Error;

/// Table construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// Requested station has no rows
    #[error("Station not found: {0}")]
    EntityNotFound(String),

    /// Requested column does not exist
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Two columns share a name
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Column cannot be read as numbers
    #[error("Column '{name}' is not numeric (dtype {dtype})")]
    NonNumericColumn { name: String, dtype: DType },

    /// Column length differs from the index length
    #[error("Column '{column}' has {actual} values, index has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Timestamps of a station are not strictly increasing
    #[error("Index of station '{station}' is not strictly increasing at row {row}")]
    UnorderedIndex { station: String, row: usize },

    /// Timestamp string could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type for frame operations.
pub type Result<T> = std::result::Result<T, FrameError>;
