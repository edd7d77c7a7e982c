//! Error types for Framescope.

use thiserror::Error;

use crate::frame::Frame;

/// Main error type for Framescope operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramescopeError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: Frame, end: Frame },

    #[error("Row {row} out of range (len {len})")]
    RowOutOfRange { row: usize, len: usize },

    #[error("Cell type mismatch: column {column} does not accept {value}")]
    CellTypeMismatch { column: &'static str, value: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for Framescope operations.
pub type Result<T> = std::result::Result<T, FramescopeError>;
