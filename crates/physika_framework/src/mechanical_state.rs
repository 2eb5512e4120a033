//! Mechanical state: the degrees of freedom a mapping reads from and writes to

use crate::data_type::DataType;
use crate::device_array::DeviceArray;

/// Positions and velocities of a simulated body
#[derive(Clone, Debug, PartialEq)]
pub struct MechanicalState<D: DataType> {
    /// Positions (in the body's local frame)
    pub positions: DeviceArray<D::Coord>,
    /// Velocities, one per position
    pub velocities: DeviceArray<D::Coord>,
}

impl<D: DataType> Default for MechanicalState<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DataType> MechanicalState<D> {
    /// Create an empty state
    pub fn new() -> Self {
        Self {
            positions: DeviceArray::new(),
            velocities: DeviceArray::new(),
        }
    }

    /// Create a state at rest at the given positions
    pub fn from_positions(positions: &[D::Coord]) -> Self {
        Self {
            positions: DeviceArray::from_slice(positions),
            velocities: DeviceArray::with_len(positions.len()),
        }
    }

    /// Number of degrees of freedom
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the state has no degrees of freedom
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType3f;
    use physika_math::Vector3;

    #[test]
    fn test_from_positions_is_at_rest() {
        let state = MechanicalState::<DataType3f>::from_positions(&[
            Vector3::new([1.0, 0.0, 0.0]),
            Vector3::new([0.0, 1.0, 0.0]),
        ]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.velocities.len(), 2);
        assert!(state.velocities.iter().all(|v| *v == Vector3::zeros()));
    }

    #[test]
    fn test_new_is_empty() {
        let state = MechanicalState::<DataType3f>::default();
        assert!(state.is_empty());
    }
}
