//! Matrix error types
//!
//! The three contract violations of the matrix algebra. Fallible methods
//! return them as values; the operator forms (`m[(i, j)]`, `m / s`) panic
//! with the same message.

use std::fmt;

/// Error type for matrix operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Element `(row, col)` requested from a `dim`x`dim` matrix
    IndexOutOfRange { row: usize, col: usize, dim: usize },
    /// Division by a scalar whose magnitude is below epsilon
    DivideByZero,
    /// Inversion of a matrix whose determinant is exactly zero
    NotInvertible,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::IndexOutOfRange { row, col, dim } => write!(
                f,
                "Matrix index out of range! ({}, {}) in a {}x{} matrix",
                row, col, dim, dim
            ),
            MatrixError::DivideByZero => write!(f, "Matrix Divide by zero error!"),
            MatrixError::NotInvertible => write!(f, "Matrix not invertible!"),
        }
    }
}

impl std::error::Error for MatrixError {}
