//! Collidable objects and collision type masks

use std::fmt::Debug;

use bitflags::bitflags;

use crate::data_type::DataType;
use crate::error::FrameworkError;
use crate::mechanical_state::MechanicalState;

bitflags! {
    /// Kind of primitive a collidable object is made of
    ///
    /// Also used as a mask: an object lists the kinds it may collide with.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionType: u32 {
        /// Bare points
        const POINTS = 1 << 0;
        /// Spheres (points with a radius)
        const SPHERES = 1 << 1;
        /// Triangle surfaces
        const TRIANGLES = 1 << 2;
        /// Tetrahedral volumes
        const TETRAHEDRA = 1 << 3;
        /// Every kind
        const ALL = 0xFFFFFFFF;
    }
}

/// An object that takes part in collision handling
///
/// Collidable objects hold their own copy of the geometry, kept in sync with
/// a [`MechanicalState`] through the update methods.
pub trait CollidableObject<D: DataType>: Debug + Send + Sync {
    /// Kind of primitives this object is made of
    fn collision_type(&self) -> CollisionType;

    /// Kinds this object may collide with
    fn collision_mask(&self) -> CollisionType {
        CollisionType::ALL
    }

    /// Whether [`initialize`](Self::initialize) has succeeded
    fn is_initialized(&self) -> bool;

    /// Object-specific setup, called once by `initialize`
    fn initialize_impl(&mut self) -> Result<(), FrameworkError>;

    /// Set the object up; later calls do nothing
    fn initialize(&mut self) -> Result<(), FrameworkError> {
        if self.is_initialized() {
            return Ok(());
        }
        self.initialize_impl()
    }

    /// Pull geometry from the mechanical state
    fn update_collidable_object(&mut self, state: &MechanicalState<D>)
        -> Result<(), FrameworkError>;

    /// Push geometry back to the mechanical state
    fn update_mechanical_state(&self, state: &mut MechanicalState<D>)
        -> Result<(), FrameworkError>;

    /// Whether this object and `other` accept each other
    ///
    /// Both objects' types must match the other's mask.
    fn accepts(&self, other: &dyn CollidableObject<D>) -> bool {
        self.collision_type().intersects(other.collision_mask())
            && other.collision_type().intersects(self.collision_mask())
    }
}
