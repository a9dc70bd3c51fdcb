//! RigidBodySystem - rigid bodies layered over the cell grid
//!
//! Bodies integrate with a fixed timestep, push particles out of their footprint when
//! their material says so, bounce off the grid edges and take impulses from explosions.
//! They are not rasterized into the grid.

mod collision;
mod snapshot;
mod system;

pub use snapshot::BodySnapshot;
pub use system::{BodyPhysics, RigidBodySystem};
