//! Error types for linear-system solving
//!
//! Solving can fail for two very different reasons: the inputs are shaped
//! wrong, or the system itself is degenerate. Degeneracy is reported with
//! the witness that proved it (the row or column where elimination got
//! stuck), so callers can distinguish inconsistent systems from
//! underdetermined ones without inspecting the matrix themselves.

use thiserror::Error;

/// Errors that can occur while validating or solving a linear system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaussError {
    /// The coefficient matrix is not square.
    #[error("coefficient matrix is not square: {nrows} rows by {ncols} columns")]
    NotSquare {
        /// Number of rows in the offending matrix
        nrows: usize,
        /// Number of columns in the offending matrix
        ncols: usize,
    },

    /// The right-hand side length does not match the matrix dimension.
    #[error("matrix is {n}x{n} but the right-hand side has {rhs_len} entries")]
    DimensionMismatch {
        /// Matrix dimension
        n: usize,
        /// Right-hand side length
        rhs_len: usize,
    },

    /// The system is inconsistent: a row reduced to all-zero coefficients
    /// while its right-hand side entry stayed non-zero.
    #[error("system has no solution: row {row} reduced to zero with a non-zero right-hand side")]
    NoSolution {
        /// Row witnessing the inconsistency
        row: usize,
    },

    /// The system is underdetermined: a row reduced to all-zero coefficients
    /// together with a zero right-hand side entry.
    #[error("system has infinitely many solutions: row {row} reduced to zero")]
    InfiniteSolutions {
        /// Row witnessing the dependency
        row: usize,
    },

    /// Every pivot candidate in a column is below the configured tolerance.
    /// The matrix is singular in a way the zero-row scan cannot see, for
    /// example a column of zeros.
    #[error("no usable pivot in column {column}: matrix is singular or nearly singular")]
    ZeroPivot {
        /// Column without a pivot
        column: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, GaussError>;

impl GaussError {
    /// Returns `true` for the two input-shape errors.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            GaussError::NotSquare { .. } | GaussError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if the system was classified as inconsistent.
    pub fn is_no_solution(&self) -> bool {
        matches!(self, GaussError::NoSolution { .. })
    }

    /// Returns `true` if the system was classified as underdetermined.
    pub fn is_infinite_solutions(&self) -> bool {
        matches!(self, GaussError::InfiniteSolutions { .. })
    }

    /// Returns `true` if elimination ran out of pivots in some column.
    pub fn is_zero_pivot(&self) -> bool {
        matches!(self, GaussError::ZeroPivot { .. })
    }
}
