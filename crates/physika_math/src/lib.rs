//! Fixed-size linear algebra for Physika
//!
//! This crate provides the small dense vectors and square matrices used by
//! the simulation framework for rigid transforms, inertia tensors and
//! similar linear maps.
//!
//! ## Core Types
//!
//! - [`Scalar`] / [`Real`] - element types (all primitive integers and floats / floats only)
//! - [`Vector`] - N-component vector ([`Vector2`], [`Vector3`], [`Vector4`])
//! - [`SquareMatrix`] - N x N matrix ([`Matrix2x2`], [`Matrix3x3`], [`Matrix4x4`])
//! - [`MatrixError`] - index, divisor and inversion failures
//!
//! ## Storage Backends
//!
//! - [`ArrayStorage`] - built-in row-major arrays (default)
//! - `NalgebraStorage` - nalgebra adapter, default with the `nalgebra-backend` feature

pub mod error;
pub mod scalar;
pub mod square_matrix;
pub mod storage;
mod vector;

pub use error::MatrixError;
pub use scalar::{Real, Scalar};
pub use square_matrix::{Matrix2x2, Matrix3x3, Matrix4x4, SquareMatrix};
#[cfg(feature = "nalgebra-backend")]
pub use storage::NalgebraStorage;
pub use storage::{ArrayStorage, DefaultStorage, MatrixStorage};
pub use vector::{Vector, Vector2, Vector3, Vector4};
