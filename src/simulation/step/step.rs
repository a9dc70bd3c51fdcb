use crate::core::random::shuffle;
use crate::domain::content::MaterialRegistry;
use crate::systems::behaviors::UpdateContext;
use crate::systems::lifetime;
use crate::systems::reactions::interact;

use super::WorldCore;

/// One tick.
///
/// The lifetime pass covers the whole grid before anything moves. Then every cell occupied
/// at that point is visited once, in a fresh random order: interactions first, then
/// movement for whatever occupies the cell afterwards. Effects are visible to cells visited
/// later in the same pass. Bodies integrate last.
pub(super) fn step(world: &mut WorldCore) {
    let content: &MaterialRegistry = &world.content;

    lifetime::decay(&mut world.grid, content, &mut world.counters, world.rng.as_mut());

    let mut positions = world.grid.occupied_positions();
    shuffle(world.rng.as_mut(), &mut positions);

    for (x, y) in positions {
        let Some(material) = world.grid.material_at(x, y) else {
            continue;
        };
        let mut ctx = UpdateContext {
            grid: &mut world.grid,
            content,
            counters: &mut world.counters,
            bodies: &mut world.rigid_bodies,
            rng: world.rng.as_mut(),
            x,
            y,
        };
        interact(&mut ctx, material);
        world.behaviors.update(&mut ctx);
    }

    world.rigid_bodies.update(&mut world.grid);
    world.frame += 1;
}
