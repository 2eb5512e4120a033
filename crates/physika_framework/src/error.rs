//! Framework error types

use std::fmt;

use physika_math::MatrixError;

/// Error type for collidable objects and mappings
#[derive(Clone, Debug, PartialEq)]
pub enum FrameworkError {
    /// An array does not have the length its owner requires
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// An update ran before `initialize`
    NotInitialized(&'static str),
    /// Matrix failure while building or inverting a transform
    Matrix(MatrixError),
}

impl fmt::Display for FrameworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameworkError::LengthMismatch { what, expected, found } => write!(
                f,
                "Length mismatch for {}: expected {}, found {}",
                what, expected, found
            ),
            FrameworkError::NotInitialized(name) => write!(f, "{} is not initialized", name),
            FrameworkError::Matrix(err) => write!(f, "Matrix error: {}", err),
        }
    }
}

impl std::error::Error for FrameworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameworkError::Matrix(err) => Some(err),
            FrameworkError::LengthMismatch { .. } => None,
            FrameworkError::NotInitialized(_) => None,
        }
    }
}

impl From<MatrixError> for FrameworkError {
    fn from(err: MatrixError) -> Self {
        FrameworkError::Matrix(err)
    }
}
