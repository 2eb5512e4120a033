//! Collidable point sets
//!
//! [`CollidablePoints`] is the simplest collidable object: a set of points,
//! each with a radius, that follows a mechanical state through a mapping.

use std::sync::Arc;

use num_traits::NumCast;

use crate::collidable_object::{CollidableObject, CollisionType};
use crate::data_type::DataType;
use crate::device_array::DeviceArray;
use crate::error::FrameworkError;
use crate::mapping::{IdentityMapping, Mapping};
use crate::mechanical_state::MechanicalState;

/// Radius given to points until one is set
pub const DEFAULT_RADIUS: f64 = 0.005;

/// Points with radii, driven by a mechanical state
#[derive(Clone, Debug)]
pub struct CollidablePoints<D: DataType> {
    mapping: Option<Arc<dyn Mapping<D>>>,
    uniform_radius: bool,
    radius: D::Real,
    radii: DeviceArray<D::Real>,
    positions: DeviceArray<D::Coord>,
    velocities: DeviceArray<D::Coord>,
    collision_mask: CollisionType,
    initialized: bool,
}

impl<D: DataType> Default for CollidablePoints<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DataType> CollidablePoints<D> {
    /// Create an empty point set with the default uniform radius
    pub fn new() -> Self {
        Self {
            mapping: None,
            uniform_radius: true,
            radius: <D::Real as NumCast>::from(DEFAULT_RADIUS)
                .unwrap_or_else(num_traits::Zero::zero),
            radii: DeviceArray::new(),
            positions: DeviceArray::new(),
            velocities: DeviceArray::new(),
            collision_mask: CollisionType::ALL,
            initialized: false,
        }
    }

    /// Use the same radius for every point
    pub fn set_radius(&mut self, radius: D::Real) {
        self.uniform_radius = true;
        self.radius = radius;
    }

    /// Use one radius per point
    ///
    /// The length is checked against the positions at initialization.
    pub fn set_radii(&mut self, radii: &[D::Real]) {
        self.uniform_radius = false;
        self.radii.assign(radii);
    }

    /// Whether all points share one radius
    pub fn has_uniform_radius(&self) -> bool {
        self.uniform_radius
    }

    /// Shared radius (meaningful when uniform)
    pub fn radius(&self) -> D::Real {
        self.radius
    }

    /// Per-point radii (meaningful when not uniform)
    pub fn radii(&self) -> &DeviceArray<D::Real> {
        &self.radii
    }

    /// Radius of point `i`, or `None` if it has no per-point radius
    pub fn radius_of(&self, i: usize) -> Option<D::Real> {
        if self.uniform_radius {
            (i < self.positions.len()).then_some(self.radius)
        } else {
            self.radii.get(i).copied()
        }
    }

    /// Replace the point positions
    pub fn set_positions(&mut self, positions: &[D::Coord]) {
        self.positions.assign(positions);
    }

    /// Replace the point velocities
    pub fn set_velocities(&mut self, velocities: &[D::Coord]) {
        self.velocities.assign(velocities);
    }

    /// Point positions
    pub fn positions(&self) -> &DeviceArray<D::Coord> {
        &self.positions
    }

    /// Point positions, mutable
    pub fn positions_mut(&mut self) -> &mut DeviceArray<D::Coord> {
        &mut self.positions
    }

    /// Point velocities
    pub fn velocities(&self) -> &DeviceArray<D::Coord> {
        &self.velocities
    }

    /// Point velocities, mutable
    pub fn velocities_mut(&mut self) -> &mut DeviceArray<D::Coord> {
        &mut self.velocities
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the set holds no points
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Mapping from the mechanical state; identity when unset
    pub fn set_mapping(&mut self, mapping: Arc<dyn Mapping<D>>) {
        self.mapping = Some(mapping);
    }

    /// Builder form of [`set_mapping`](Self::set_mapping)
    pub fn with_mapping(mut self, mapping: Arc<dyn Mapping<D>>) -> Self {
        self.set_mapping(mapping);
        self
    }

    /// Remove the mapping, falling back to identity
    pub fn clear_mapping(&mut self) {
        self.mapping = None;
    }

    /// Kinds these points may collide with
    pub fn set_collision_mask(&mut self, mask: CollisionType) {
        self.collision_mask = mask;
    }
}

fn resolve_mapping<D: DataType>(mapping: &Option<Arc<dyn Mapping<D>>>) -> &dyn Mapping<D> {
    match mapping {
        Some(mapping) => mapping.as_ref(),
        None => &IdentityMapping,
    }
}

impl<D: DataType> CollidableObject<D> for CollidablePoints<D> {
    fn collision_type(&self) -> CollisionType {
        CollisionType::POINTS
    }

    fn collision_mask(&self) -> CollisionType {
        self.collision_mask
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn initialize_impl(&mut self) -> Result<(), FrameworkError> {
        let count = self.positions.len();

        if self.velocities.is_empty() {
            self.velocities.resize(count);
        } else if self.velocities.len() != count {
            return Err(FrameworkError::LengthMismatch {
                what: "velocities",
                expected: count,
                found: self.velocities.len(),
            });
        }

        if !self.uniform_radius && self.radii.len() != count {
            return Err(FrameworkError::LengthMismatch {
                what: "radii",
                expected: count,
                found: self.radii.len(),
            });
        }

        self.initialized = true;
        log::debug!(
            "Initialized {} collidable points ({}, {} radius)",
            count,
            D::NAME,
            if self.uniform_radius { "uniform" } else { "per-point" }
        );
        Ok(())
    }

    fn update_collidable_object(
        &mut self,
        state: &MechanicalState<D>,
    ) -> Result<(), FrameworkError> {
        if !self.initialized {
            return Err(FrameworkError::NotInitialized("CollidablePoints"));
        }

        let mapping = resolve_mapping(&self.mapping);
        mapping.apply(state, &mut self.positions, &mut self.velocities);
        log::debug!(
            "Updated {} collidable points from state via {}",
            self.positions.len(),
            mapping.name()
        );
        Ok(())
    }

    fn update_mechanical_state(
        &self,
        state: &mut MechanicalState<D>,
    ) -> Result<(), FrameworkError> {
        if !self.initialized {
            return Err(FrameworkError::NotInitialized("CollidablePoints"));
        }

        let mapping = resolve_mapping(&self.mapping);
        mapping.apply_inverse(&self.positions, &self.velocities, state);
        log::debug!(
            "Updated mechanical state from {} collidable points via {}",
            self.positions.len(),
            mapping.name()
        );
        Ok(())
    }
}
