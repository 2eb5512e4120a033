//! Rigid transforms (rotation + translation)
//!
//! Used by mappings to move points between a body's local frame and world
//! space.

use std::fmt::Debug;

use physika_math::{MatrixError, Real, SquareMatrix, Vector};

/// Rigid motion applied to coordinates of type `C`
pub trait RigidMotion<C>: Copy + Debug + Send + Sync + Sized {
    /// Map a point: rotation, then translation
    fn transform_point(&self, p: C) -> C;

    /// Map a direction or velocity: rotation only
    fn transform_vector(&self, v: C) -> C;

    /// The motion that undoes this one
    fn inverse(&self) -> Result<Self, MatrixError>;
}

/// Rotation matrix plus translation in N dimensions
#[derive(Clone, Copy, Debug)]
pub struct RigidTransform<T, const N: usize> {
    /// Rotation (any invertible linear map is accepted)
    pub rotation: SquareMatrix<T, N>,
    /// Translation applied after the rotation
    pub translation: Vector<T, N>,
}

impl<T: Real, const N: usize> PartialEq for RigidTransform<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.rotation == other.rotation && self.translation == other.translation
    }
}

impl<T: Real, const N: usize> Default for RigidTransform<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real, const N: usize> RigidTransform<T, N> {
    /// Transform that leaves every point in place
    pub fn identity() -> Self {
        Self {
            rotation: SquareMatrix::identity(),
            translation: Vector::zeros(),
        }
    }

    /// Create a transform from a rotation and a translation
    pub fn new(rotation: SquareMatrix<T, N>, translation: Vector<T, N>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Pure translation
    pub fn from_translation(translation: Vector<T, N>) -> Self {
        Self {
            rotation: SquareMatrix::identity(),
            translation,
        }
    }

    /// Rotation by `angle` radians in the plane spanned by axes `p1` and `p2`
    ///
    /// Turns axis `p1` towards axis `p2`.
    pub fn from_plane_rotation(angle: T, p1: usize, p2: usize) -> Result<Self, MatrixError> {
        let (sn, cs) = angle.sin_cos();
        let mut rotation = SquareMatrix::<T, N>::identity();

        *rotation.at_mut(p1, p1)? = cs;
        *rotation.at_mut(p2, p2)? = cs;
        *rotation.at_mut(p2, p1)? = sn;
        *rotation.at_mut(p1, p2)? = -sn;

        Ok(Self::from_rotation(rotation))
    }

    /// Pure rotation
    pub fn from_rotation(rotation: SquareMatrix<T, N>) -> Self {
        Self {
            rotation,
            translation: Vector::zeros(),
        }
    }

    /// Transform applying `other` first, then `self`
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.rotation * other.translation + self.translation,
        }
    }

    /// Apply to a point
    #[inline]
    pub fn transform_point(&self, p: Vector<T, N>) -> Vector<T, N> {
        self.rotation * p + self.translation
    }

    /// Apply to a direction (no translation)
    #[inline]
    pub fn transform_vector(&self, v: Vector<T, N>) -> Vector<T, N> {
        self.rotation * v
    }

    /// Inverse transform
    ///
    /// Fails when the rotation matrix is singular.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let rotation = self.rotation.inverse()?;
        Ok(Self {
            rotation,
            translation: -(rotation * self.translation),
        })
    }
}

impl<T: Real, const N: usize> RigidMotion<Vector<T, N>> for RigidTransform<T, N> {
    #[inline]
    fn transform_point(&self, p: Vector<T, N>) -> Vector<T, N> {
        RigidTransform::transform_point(self, p)
    }

    #[inline]
    fn transform_vector(&self, v: Vector<T, N>) -> Vector<T, N> {
        RigidTransform::transform_vector(self, v)
    }

    fn inverse(&self) -> Result<Self, MatrixError> {
        RigidTransform::inverse(self)
    }
}
