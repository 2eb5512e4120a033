//! Physika - fixed-size matrix algebra and collidable point sets
//!
//! Re-exports the workspace crates and adds the application configuration
//! used by the `physika` binary.

pub mod config;

pub use physika_framework as framework;
pub use physika_math as math;
