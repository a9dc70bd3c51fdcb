use crate::core::grid::NEIGHBORS;
use crate::domain::materials::Material;
use crate::systems::behaviors::UpdateContext;

/// Per neighbor, per tick
const DISSOLVE_CHANCE: f32 = 0.1;
/// Rolled only when a dissolve roll fails
const SPENT_CHANCE: f32 = 0.01;

/// Corroders dissolve occupied neighbors outside their exclusion set and occasionally
/// use themselves up.
pub(super) fn update(ctx: &mut UpdateContext, props: &Material) {
    let Some(corrosion) = props.corrosion.as_ref() else {
        return;
    };
    let (x, y) = (ctx.x, ctx.y);

    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (x + dx, y + dy);
        let Some(neighbor) = ctx.grid.material_at(nx, ny) else {
            continue;
        };
        if corrosion.exclude.contains(&neighbor) {
            continue;
        }
        if ctx.rng.chance(DISSOLVE_CHANCE) {
            ctx.grid.clear_cell(nx, ny);
            ctx.counters.record_corroded(props.id);
        } else if ctx.rng.chance(SPENT_CHANCE) {
            ctx.grid.clear_cell(x, y);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::behaviors::test_support::{Bench, Scripted};

    #[test]
    fn acid_spares_excluded_materials() {
        let mut bench = Bench::new(3, 1);
        let mut rng = Scripted { uniform: 0.05, below: 0 };
        bench.put(0, 0, "wall", &mut rng);
        bench.put(1, 0, "acid", &mut rng);
        bench.put(2, 0, "wood", &mut rng);
        let acid = bench.id("acid");
        let props = bench.content.get(acid).unwrap().clone();
        update(&mut bench.ctx(&mut rng, 1, 0), &props);
        assert_eq!(bench.at(0, 0), Some("wall"));
        assert_eq!(bench.at(2, 0), None);
        assert_eq!(bench.at(1, 0), Some("acid"));
        assert_eq!(bench.counters.corroded(acid), 1);
    }
}
