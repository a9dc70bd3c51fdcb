//! Plant growth. "Up" is y - 1.
//!
//! A plant with open space above drinks an adjacent water cell (left, right or below)
//! to grow upward, or rarely grows without one. A plant with its top blocked
//! occasionally drinks anyway and grows into an open upper diagonal.

use crate::domain::materials::Material;
use crate::systems::behaviors::UpdateContext;

const SPONTANEOUS_GROWTH_CHANCE: f32 = 0.001;
const STALLED_GROWTH_CHANCE: f32 = 0.05;
const WATER_SIDES: [(i32, i32); 3] = [(-1, 0), (1, 0), (0, 1)];

pub(super) fn update(ctx: &mut UpdateContext, props: &Material) {
    let water = ctx.content.roles().water;
    let (x, y) = (ctx.x, ctx.y);
    let drink = water.and_then(|water| {
        WATER_SIDES
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .find(|&(wx, wy)| ctx.grid.holds(wx, wy, water))
    });

    if ctx.grid.is_empty(x, y - 1) {
        match drink {
            Some((wx, wy)) => {
                ctx.grid.clear_cell(wx, wy);
                ctx.replace(x, y - 1, props.id);
            }
            None => {
                if ctx.rng.chance(SPONTANEOUS_GROWTH_CHANCE) {
                    ctx.replace(x, y - 1, props.id);
                }
            }
        }
        return;
    }

    if !ctx.rng.chance(STALLED_GROWTH_CHANCE) {
        return;
    }
    let Some((wx, wy)) = drink else {
        return;
    };
    let diagonals = ctx.random_pair((-1, -1), (1, -1));
    if let Some(&(dx, dy)) = diagonals
        .iter()
        .find(|&&(dx, dy)| ctx.grid.is_empty(x + dx, y + dy))
    {
        ctx.grid.clear_cell(wx, wy);
        ctx.replace(x + dx, y + dy, props.id);
    }
}
