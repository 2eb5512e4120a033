//! Data-type bundles
//!
//! A [`DataType`] fixes the scalar, coordinate, matrix and rigid-motion types
//! a simulation runs with, so generic framework code needs a single type
//! parameter.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use bytemuck::Pod;
use physika_math::{Matrix3x3, Real, Vector3};

use crate::rigid::{RigidMotion, RigidTransform};

/// Bundle of associated types used throughout the framework
pub trait DataType: Copy + Debug + Send + Sync + 'static {
    /// Scalar type
    type Real: Real + Pod;
    /// Point / velocity type
    type Coord: Copy
        + Debug
        + PartialEq
        + Pod
        + Send
        + Sync
        + Add<Output = Self::Coord>
        + Sub<Output = Self::Coord>
        + Mul<Self::Real, Output = Self::Coord>;
    /// Linear map on coordinates
    type Matrix: Copy + Debug + Mul<Self::Coord, Output = Self::Coord>;
    /// Rigid motion on coordinates
    type Rigid: RigidMotion<Self::Coord>;

    /// Short name for logs
    const NAME: &'static str;
}

/// 3D, single precision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataType3f;

impl DataType for DataType3f {
    type Real = f32;
    type Coord = Vector3<f32>;
    type Matrix = Matrix3x3<f32>;
    type Rigid = RigidTransform<f32, 3>;

    const NAME: &'static str = "DataType3f";
}

/// 3D, double precision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataType3d;

impl DataType for DataType3d {
    type Real = f64;
    type Coord = Vector3<f64>;
    type Matrix = Matrix3x3<f64>;
    type Rigid = RigidTransform<f64, 3>;

    const NAME: &'static str = "DataType3d";
}
