//! Mappings between mechanical states and collidable representations
//!
//! A mapping moves positions and velocities from the degrees of freedom of a
//! body onto the points used for collision ([`Mapping::apply`]) and back
//! ([`Mapping::apply_inverse`]). Destination arrays take the length of the
//! source.

use std::fmt::Debug;

use physika_math::MatrixError;

use crate::data_type::DataType;
use crate::device_array::DeviceArray;
use crate::mechanical_state::MechanicalState;
use crate::rigid::RigidMotion;

/// Transfer of positions and velocities between representations
pub trait Mapping<D: DataType>: Debug + Send + Sync {
    /// Name for logs
    fn name(&self) -> &'static str;

    /// Mechanical state -> collidable positions and velocities
    fn apply(
        &self,
        state: &MechanicalState<D>,
        positions: &mut DeviceArray<D::Coord>,
        velocities: &mut DeviceArray<D::Coord>,
    );

    /// Collidable positions and velocities -> mechanical state
    fn apply_inverse(
        &self,
        positions: &DeviceArray<D::Coord>,
        velocities: &DeviceArray<D::Coord>,
        state: &mut MechanicalState<D>,
    );
}

/// Copies positions and velocities unchanged
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityMapping;

impl<D: DataType> Mapping<D> for IdentityMapping {
    fn name(&self) -> &'static str {
        "IdentityMapping"
    }

    fn apply(
        &self,
        state: &MechanicalState<D>,
        positions: &mut DeviceArray<D::Coord>,
        velocities: &mut DeviceArray<D::Coord>,
    ) {
        positions.copy_from(&state.positions);
        velocities.copy_from(&state.velocities);
    }

    fn apply_inverse(
        &self,
        positions: &DeviceArray<D::Coord>,
        velocities: &DeviceArray<D::Coord>,
        state: &mut MechanicalState<D>,
    ) {
        state.positions.copy_from(positions);
        state.velocities.copy_from(velocities);
    }
}

/// Places local points in the world through a rigid frame
///
/// Points are transformed by the full motion, velocities by its rotation
/// only. The inverse frame is computed once, at construction.
#[derive(Clone, Copy, Debug)]
pub struct RigidMapping<D: DataType> {
    frame: D::Rigid,
    inverse_frame: D::Rigid,
}

impl<D: DataType> RigidMapping<D> {
    /// Create a mapping for `frame`
    ///
    /// Fails when the frame cannot be inverted.
    pub fn new(frame: D::Rigid) -> Result<Self, MatrixError> {
        let inverse_frame = frame.inverse()?;
        Ok(Self {
            frame,
            inverse_frame,
        })
    }

    /// Local-to-world frame
    pub fn frame(&self) -> &D::Rigid {
        &self.frame
    }

    /// World-to-local frame
    pub fn inverse_frame(&self) -> &D::Rigid {
        &self.inverse_frame
    }
}

impl<D: DataType> Mapping<D> for RigidMapping<D> {
    fn name(&self) -> &'static str {
        "RigidMapping"
    }

    fn apply(
        &self,
        state: &MechanicalState<D>,
        positions: &mut DeviceArray<D::Coord>,
        velocities: &mut DeviceArray<D::Coord>,
    ) {
        let frame = self.frame;
        positions.map_from(&state.positions, |p| frame.transform_point(p));
        velocities.map_from(&state.velocities, |v| frame.transform_vector(v));
    }

    fn apply_inverse(
        &self,
        positions: &DeviceArray<D::Coord>,
        velocities: &DeviceArray<D::Coord>,
        state: &mut MechanicalState<D>,
    ) {
        let inverse = self.inverse_frame;
        state
            .positions
            .map_from(positions, |p| inverse.transform_point(p));
        state
            .velocities
            .map_from(velocities, |v| inverse.transform_vector(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::{DataType3d, DataType3f};
    use crate::rigid::RigidTransform;
    use physika_math::{Matrix3x3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn sample_state() -> MechanicalState<DataType3d> {
        let mut state = MechanicalState::from_positions(&[
            Vector3::new([1.0, 0.0, 0.0]),
            Vector3::new([0.0, 2.0, 0.0]),
        ]);
        state.velocities.assign(&[
            Vector3::new([0.0, 0.0, 1.0]),
            Vector3::new([1.0, 0.0, 0.0]),
        ]);
        state
    }

    fn quarter_turn_shifted() -> RigidTransform<f64, 3> {
        let turn = RigidTransform::from_plane_rotation(FRAC_PI_2, 0, 1).unwrap();
        RigidTransform::from_translation(Vector3::new([0.0, 0.0, 5.0])).compose(&turn)
    }

    #[test]
    fn test_identity_mapping_copies() {
        let state = sample_state();
        let mut positions = DeviceArray::new();
        let mut velocities = DeviceArray::with_len(7);
        Mapping::<DataType3d>::apply(&IdentityMapping, &state, &mut positions, &mut velocities);

        assert_eq!(positions, state.positions);
        assert_eq!(velocities, state.velocities);
    }

    #[test]
    fn test_identity_mapping_inverse() {
        let state = sample_state();
        let mut back = MechanicalState::<DataType3d>::new();
        IdentityMapping.apply_inverse(&state.positions, &state.velocities, &mut back);
        assert_eq!(back, state);
    }

    #[test]
    fn test_rigid_mapping_apply() {
        let mapping = RigidMapping::<DataType3d>::new(quarter_turn_shifted()).unwrap();
        let state = sample_state();
        let mut positions = DeviceArray::new();
        let mut velocities = DeviceArray::new();
        mapping.apply(&state, &mut positions, &mut velocities);

        let p0 = *positions.get(0).unwrap();
        assert!((p0 - Vector3::new([0.0, 1.0, 5.0])).norm() < EPSILON);
        // velocities ignore the translation
        let v1 = *velocities.get(1).unwrap();
        assert!((v1 - Vector3::new([0.0, 1.0, 0.0])).norm() < EPSILON);
        let v0 = *velocities.get(0).unwrap();
        assert!((v0 - Vector3::new([0.0, 0.0, 1.0])).norm() < EPSILON);
    }

    #[test]
    fn test_rigid_mapping_round_trip() {
        let mapping = RigidMapping::<DataType3d>::new(quarter_turn_shifted()).unwrap();
        let state = sample_state();
        let mut positions = DeviceArray::new();
        let mut velocities = DeviceArray::new();
        mapping.apply(&state, &mut positions, &mut velocities);

        let mut back = MechanicalState::new();
        mapping.apply_inverse(&positions, &velocities, &mut back);
        assert_eq!(back.len(), state.len());
        for (a, b) in back.positions.iter().zip(state.positions.iter()) {
            assert!((*a - *b).norm() < EPSILON);
        }
        for (a, b) in back.velocities.iter().zip(state.velocities.iter()) {
            assert!((*a - *b).norm() < EPSILON);
        }
    }

    #[test]
    fn test_rigid_mapping_rejects_singular_frame() {
        let frame = RigidTransform::from_rotation(Matrix3x3::<f32>::zeros());
        let err = RigidMapping::<DataType3f>::new(frame).unwrap_err();
        assert_eq!(err, MatrixError::NotInvertible);
    }

    #[test]
    fn test_names() {
        assert_eq!(Mapping::<DataType3f>::name(&IdentityMapping), "IdentityMapping");
        let mapping = RigidMapping::<DataType3f>::new(RigidTransform::identity()).unwrap();
        assert_eq!(mapping.name(), "RigidMapping");
    }
}
