//! Simulation framework for Physika
//!
//! Holds the data that simulated bodies share with collision handling:
//! device arrays, mechanical states, mappings between representations and
//! collidable objects grouped in a world.
//!
//! ## Core Types
//!
//! - [`DataType`] - type bundle ([`DataType3f`], [`DataType3d`])
//! - [`DeviceArray`] - plain-old-data buffer mirrored on the device
//! - [`RigidTransform`] - rotation + translation, implements [`RigidMotion`]
//! - [`Mapping`] - [`IdentityMapping`], [`RigidMapping`]
//! - [`CollidablePoints`] - points with radii, a [`CollidableObject`]
//! - [`CollidableWorld`] - objects and their mechanical states
//!
//! ## Example
//!
//! ```
//! use physika_framework::{
//!     CollidablePoints, CollidableWorld, DataType3f, MechanicalState,
//! };
//! use physika_math::Vector3;
//!
//! let mut world = CollidableWorld::<DataType3f>::new();
//! let state = MechanicalState::from_positions(&[Vector3::new([0.0, 1.0, 0.0])]);
//! let key = world.add(CollidablePoints::new(), state);
//!
//! world.initialize_all().unwrap();
//! world.sync_collidables().unwrap();
//! assert!(world.get(key).unwrap().is_initialized());
//! ```

pub mod collidable_object;
pub mod collidable_points;
pub mod data_type;
pub mod device_array;
pub mod error;
pub mod mapping;
pub mod mechanical_state;
pub mod rigid;
pub mod world;

pub use collidable_object::{CollidableObject, CollisionType};
pub use collidable_points::{CollidablePoints, DEFAULT_RADIUS};
pub use data_type::{DataType, DataType3d, DataType3f};
pub use device_array::DeviceArray;
pub use error::FrameworkError;
pub use mapping::{IdentityMapping, Mapping, RigidMapping};
pub use mechanical_state::MechanicalState;
pub use rigid::{RigidMotion, RigidTransform};
pub use world::{CollidableKey, CollidableWorld};
