//! Fire spread from flaming materials.
//!
//! Each flammable neighbor ignites with chance `ignition × susceptibility`. Detonators
//! explode and leave fire or lava behind; everything else burns into its own burn target,
//! else the source's override, else fire.

use crate::core::grid::NEIGHBORS;
use crate::domain::materials::Material;
use crate::systems::behaviors::UpdateContext;
use crate::systems::explosion::explode;

/// Chance a detonated cell is left as lava rather than fire
const DETONATION_LAVA_CHANCE: f32 = 0.2;

pub(super) fn update(ctx: &mut UpdateContext, props: &Material) {
    let Some(ignition) = props.ignition else {
        return;
    };
    let content = ctx.content;
    let roles = *content.roles();
    let (x, y) = (ctx.x, ctx.y);

    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        let Some(target) = ctx.grid.material_at(nx, ny).and_then(|m| content.get(m)) else {
            continue;
        };
        let Some(combustion) = target.combustion.as_ref() else {
            continue;
        };
        if !ctx.rng.chance(ignition * combustion.susceptibility) {
            continue;
        }

        let result = match target.explode_radius {
            Some(radius) => {
                explode(ctx, nx, ny, radius);
                match roles.lava {
                    Some(lava) if ctx.rng.chance(DETONATION_LAVA_CHANCE) => lava,
                    _ => roles.fire,
                }
            }
            None => combustion
                .burns_into
                .or(props.override_my_burn)
                .unwrap_or(roles.fire),
        };
        ctx.replace(nx, ny, result);

        if ctx.current() != Some(props.id) {
            return;
        }
    }
}
