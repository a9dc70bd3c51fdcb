//! Systems: per-tick rules (movement, reactions, lifetime, explosions), rigid bodies and
//! the achievement tracker.

pub mod achievements;
pub mod behaviors;
pub mod explosion;
pub mod lifetime;
pub mod reactions;
pub mod rigid_body;
pub mod rigid_body_system;
