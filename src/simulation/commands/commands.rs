use std::sync::Arc;

use tracing::info;

use crate::core::error::Result;
use crate::domain::content::MaterialRegistry;
use crate::domain::materials::MaterialId;

use super::WorldCore;

pub(super) fn create_particle(world: &mut WorldCore, x: i32, y: i32, material: MaterialId) -> bool {
    world.grid.create(
        x,
        y,
        material,
        &world.content,
        &mut world.counters,
        world.rng.as_mut(),
    )
}

pub(super) fn remove_particle(world: &mut WorldCore, x: i32, y: i32) -> bool {
    if world.grid.material_at(x, y).is_none() {
        return false;
    }
    world.grid.clear_cell(x, y);
    true
}

pub(super) fn paint_disc(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, material: MaterialId) -> u32 {
    let mut placed = 0;
    for (x, y) in world.grid.disc(cx, cy, radius.max(0)) {
        if create_particle(world, x, y, material) {
            placed += 1;
        }
    }
    placed
}

pub(super) fn erase_disc(world: &mut WorldCore, cx: i32, cy: i32, radius: i32) -> u32 {
    let mut removed = 0;
    for (x, y) in world.grid.disc(cx, cy, radius.max(0)) {
        if remove_particle(world, x, y) {
            removed += 1;
        }
    }
    removed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.reset();
    world.rigid_bodies.clear();
    info!(
        width = world.grid.width(),
        height = world.grid.height(),
        "world cleared"
    );
}

pub(super) fn load_content_bundle(world: &mut WorldCore, json: &str) -> Result<()> {
    let registry = MaterialRegistry::from_bundle_json(json)?;
    let count = registry.len();
    world.content = Arc::new(registry);
    world.counters.reset(count);
    clear(world);
    info!(materials = count, "content bundle loaded");
    Ok(())
}

pub(super) fn query_cell(world: &WorldCore, x: i32, y: i32) -> Option<(MaterialId, f32)> {
    let cell = world.grid.get(x, y)?;
    let material = cell.material?;
    Some((material, world.content.life_fraction(material, cell.life)))
}
