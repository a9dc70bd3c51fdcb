use crate::core::grid::NEIGHBORS;
use crate::domain::materials::Material;
use crate::systems::behaviors::UpdateContext;

const CLONE_CHANCE: f32 = 0.8;
const PLANT_CLONE_CHANCE: f32 = 0.05;
/// Chance a plant clone that passed its roll may still go downward
const PLANT_DOWNWARD_CHANCE: f32 = 0.3;

/// Cloners fill empty neighbors with their clone target. Plants spread slowly and
/// mostly upward or sideways.
pub(super) fn update(ctx: &mut UpdateContext, props: &Material) {
    let Some(target) = props.clone_into else {
        return;
    };
    let is_plant = ctx.content.roles().plant == Some(props.id);
    let (x, y) = (ctx.x, ctx.y);

    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        if !ctx.grid.is_empty(nx, ny) {
            continue;
        }
        let clone = if is_plant {
            ctx.rng.chance(PLANT_CLONE_CHANCE)
                && (dy <= 0 || ctx.rng.chance(PLANT_DOWNWARD_CHANCE))
        } else {
            ctx.rng.chance(CLONE_CHANCE)
        };
        if clone {
            ctx.replace(nx, ny, target);
        }
    }
}
