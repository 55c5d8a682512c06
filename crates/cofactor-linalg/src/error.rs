//! Errors raised at the matrix API boundary.

use std::fmt;

use thiserror::Error;

/// Dimensions of a matrix, rows by columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Errors that can occur in matrix operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation.
    #[error("shape mismatch in {op}: {left} vs {right}")]
    ShapeMismatch {
        /// Name of the operation.
        op: &'static str,
        /// Shape of the left operand.
        left: Shape,
        /// Shape of the right operand.
        right: Shape,
    },

    /// The operation needs a square matrix.
    #[error("expected a square matrix, got {0}")]
    NotSquare(Shape),

    /// Rows supplied to a constructor have different lengths.
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The matrix has no inverse.
    #[error("matrix is singular")]
    Singular,

    /// A requested region does not fit inside the matrix.
    #[error("region rows {top}..{bottom}, columns {left}..{right} is outside a {shape} matrix")]
    OutOfBounds {
        /// First row of the region.
        top: usize,
        /// First column of the region.
        left: usize,
        /// One past the last row of the region.
        bottom: usize,
        /// One past the last column of the region.
        right: usize,
        /// Shape of the matrix.
        shape: Shape,
    },

    /// Permutation expansion was refused because the order is too large.
    #[error("Leibniz expansion of order {order} exceeds the configured maximum of {max}")]
    TooLarge {
        /// Order of the matrix.
        order: usize,
        /// Configured maximum order.
        max: usize,
    },
}

/// Result alias for matrix operations.
pub type Result<T, E = MatrixError> = std::result::Result<T, E>;
