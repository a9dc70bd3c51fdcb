//! Electricity: spreads into idle conductors, then burns down its own short pulse.
//!
//! An electrified conductor remembers what it was. When the pulse runs out it reverts
//! with a cooldown life so the current cannot bounce straight back into it.

use crate::core::grid::{Cell, NEIGHBORS};
use crate::domain::materials::{Material, CONDUCTION_COOLDOWN, PULSE_LIFE};
use crate::systems::behaviors::UpdateContext;

pub(super) fn update(ctx: &mut UpdateContext, props: &Material) {
    let (x, y) = (ctx.x, ctx.y);

    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        let Some(cell) = ctx.grid.get(nx, ny).copied() else {
            continue;
        };
        let Some(neighbor) = cell.material else {
            continue;
        };
        if ctx.content.is_conductive(neighbor) && cell.life <= 0 {
            ctx.grid.set_cell(
                nx,
                ny,
                Cell {
                    material: Some(props.id),
                    life: PULSE_LIFE,
                    conduction: Some(neighbor),
                },
            );
        }
    }

    let own = ctx.grid.cell(x, y);
    let life = own.life - 1;
    if life > 0 {
        ctx.grid.set_life(x, y, life);
        return;
    }
    match own.conduction {
        Some(prior) => ctx.grid.set_cell(
            x,
            y,
            Cell {
                material: Some(prior),
                life: CONDUCTION_COOLDOWN,
                conduction: None,
            },
        ),
        None => ctx.grid.clear_cell(x, y),
    }
}
