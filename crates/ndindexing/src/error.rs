//! Error types for ndindexing

use thiserror::Error;

/// Result type for ndindexing operations
pub type Result<T> = std::result::Result<T, IndexingError>;

/// Coarse classification of an [`IndexingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed construction parameters or a tuple of the wrong rank.
    InvalidArgument,
    /// A coordinate or flat index lies outside the index space.
    OutOfRange,
    /// A value does not fit the coordinate or index type.
    Overflow,
}

/// Errors that can occur while building or using an [`crate::Indexing`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexingError {
    /// Rank must be at least 1
    #[error("Index space must have at least one dimension")]
    EmptyRank,

    /// base, extent and order must all have the same length
    #[error("Length mismatch: base has {base}, extent has {extent}, order has {order} entries")]
    LengthMismatch {
        base: usize,
        extent: usize,
        order: usize,
    },

    /// Order entry does not name a dimension
    #[error("Order entry {axis} at position {position} is not a dimension of a rank-{rank} space")]
    AxisOutOfRange {
        position: usize,
        axis: usize,
        rank: usize,
    },

    /// Order entry appears more than once
    #[error("Order is not a permutation: dimension {axis} appears more than once")]
    DuplicateAxis { axis: usize },

    /// Extents must be non-negative
    #[error("Extent {extent} for dimension {dim} is negative")]
    NegativeExtent { dim: usize, extent: i64 },

    /// Tuple (or output buffer) has the wrong number of entries
    #[error("Tuple must have length {expected}, got {actual}")]
    TupleLength { expected: usize, actual: usize },

    /// Coordinate outside [lower, upper)
    #[error("Coordinate {value} for dimension {dim} out of range [{lower}, {upper})")]
    CoordinateOutOfRange {
        dim: usize,
        value: i64,
        lower: i64,
        upper: i64,
    },

    /// Flat index outside [0, size)
    #[error("Flat index {index} out of range [0, {size})")]
    IndexOutOfRange { index: i128, size: i128 },

    /// A coordinate-typed value does not fit the coordinate type
    #[error("Value {value} for dimension {dim} does not fit coordinate type {ty}")]
    CoordinateOverflow { dim: usize, value: i128, ty: &'static str },

    /// A stride or the total size does not fit the index type
    #[error("Stride or size of dimension {dim} overflows index type {ty}")]
    IndexOverflow { dim: usize, ty: &'static str },
}

impl IndexingError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IndexingError::EmptyRank
            | IndexingError::LengthMismatch { .. }
            | IndexingError::AxisOutOfRange { .. }
            | IndexingError::DuplicateAxis { .. }
            | IndexingError::NegativeExtent { .. }
            | IndexingError::TupleLength { .. } => ErrorKind::InvalidArgument,
            IndexingError::CoordinateOutOfRange { .. } | IndexingError::IndexOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            IndexingError::CoordinateOverflow { .. } | IndexingError::IndexOverflow { .. } => {
                ErrorKind::Overflow
            }
        }
    }
}
