//! RigidBody - a shape that moves as a unit over the cell grid
//!
//! Bodies are an overlay: they are never written into the grid. Their footprint is
//! derived each step from the shape offsets, position and rotation.

mod body;
mod vec2;

pub use body::RigidBody;
pub use vec2::Vec2;
