//! Shape error model.

use thiserror::Error;

/// Result type used across the shape layer.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Shape-level error.
///
/// Only construction can fail. Once a shape exists every operation on it
/// (rotation, cloning, container bulk operations) is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Width or height was zero.
    #[error("invalid dimension: {width}x{height} (both sides must be positive)")]
    InvalidDimension { width: u32, height: u32 },

    /// A fill symbol was empty or not printable.
    #[error("invalid fill symbol: {0}")]
    InvalidFillSymbol(String),

    /// Generator bounds were empty or inverted.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A dimension source produced values outside the requested bounds.
    #[error("dimension source returned {width}x{height}, outside the requested bounds")]
    DimensionOutOfBounds { width: u32, height: u32 },
}

impl ShapeError {
    pub fn dimension(width: u32, height: u32) -> Self {
        Self::InvalidDimension { width, height }
    }

    pub fn fill_symbol(msg: impl Into<String>) -> Self {
        Self::InvalidFillSymbol(msg.into())
    }

    pub fn bounds(msg: impl Into<String>) -> Self {
        Self::InvalidBounds(msg.into())
    }

    pub fn out_of_bounds(width: u32, height: u32) -> Self {
        Self::DimensionOutOfBounds { width, height }
    }
}
