use tracing::debug;

use crate::core::error::Result;
use crate::systems::behaviors::UpdateContext;
use crate::systems::explosion::explode;

use super::WorldCore;

pub(super) fn add_rigid_body(world: &mut WorldCore, shape: &str, material: &str, x: f32, y: f32) -> Result<u32> {
    world.rigid_bodies.add_by_key(shape, material, x, y)
}

pub(super) fn apply_explosion(world: &mut WorldCore, x: i32, y: i32, radius: i32) {
    debug!(x, y, radius, "explosion requested");
    let mut ctx = UpdateContext {
        grid: &mut world.grid,
        content: &world.content,
        counters: &mut world.counters,
        bodies: &mut world.rigid_bodies,
        rng: world.rng.as_mut(),
        x,
        y,
    };
    explode(&mut ctx, x, y, radius);
}
