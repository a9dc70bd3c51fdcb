//! Water quenches lava into obsidian (boiling itself into steam) and dissolves salt.

use crate::core::grid::NEIGHBORS;
use crate::domain::materials::Material;
use crate::systems::behaviors::UpdateContext;

pub(super) fn update(ctx: &mut UpdateContext, props: &Material) {
    let roles = *ctx.content.roles();
    let (x, y) = (ctx.x, ctx.y);

    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        let Some(neighbor) = ctx.grid.material_at(nx, ny) else {
            continue;
        };

        if Some(neighbor) == roles.lava {
            let (Some(steam), Some(obsidian)) = (roles.steam, roles.obsidian) else {
                continue;
            };
            if ctx.current() == Some(props.id) {
                ctx.replace(x, y, steam);
            }
            ctx.replace(nx, ny, obsidian);
        } else if Some(neighbor) == roles.salt {
            ctx.grid.clear_cell(nx, ny);
        }
    }
}
