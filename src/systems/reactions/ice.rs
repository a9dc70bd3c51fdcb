use crate::core::grid::NEIGHBORS;
use crate::domain::materials::Material;
use crate::systems::behaviors::UpdateContext;

/// Per hot neighbor, per tick
const MELT_CHANCE: f32 = 0.2;

/// Ice next to fire or lava may melt into water
pub(super) fn update(ctx: &mut UpdateContext, _props: &Material) {
    let roles = *ctx.content.roles();
    let Some(water) = roles.water else {
        return;
    };
    for (dx, dy) in NEIGHBORS {
        let hot = match ctx.neighbor(dx, dy) {
            Some(n) => n == roles.fire || Some(n) == roles.lava,
            None => false,
        };
        if hot && ctx.rng.chance(MELT_CHANCE) {
            let (x, y) = (ctx.x, ctx.y);
            ctx.replace(x, y, water);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::behaviors::test_support::{Bench, Scripted};

    #[test]
    fn melts_next_to_heat() {
        let mut bench = Bench::new(2, 1);
        let mut rng = Scripted { uniform: 0.1, below: 0 };
        bench.put(0, 0, "ice", &mut rng);
        bench.put(1, 0, "lava", &mut rng);
        let props = bench.content.get(bench.id("ice")).unwrap().clone();
        update(&mut bench.ctx(&mut rng, 0, 0), &props);
        assert_eq!(bench.at(0, 0), Some("water"));
    }

    #[test]
    fn failed_roll_or_no_heat_keeps_ice() {
        let mut bench = Bench::new(3, 1);
        let mut rng = Scripted { uniform: 0.3, below: 0 };
        bench.put(0, 0, "ice", &mut rng);
        bench.put(1, 0, "fire", &mut rng);
        bench.put(2, 0, "ice", &mut rng);
        let props = bench.content.get(bench.id("ice")).unwrap().clone();
        update(&mut bench.ctx(&mut rng, 0, 0), &props);
        assert_eq!(bench.at(0, 0), Some("ice"));

        let mut sure = Scripted { uniform: 0.0, below: 0 };
        bench.grid.clear_cell(1, 0);
        update(&mut bench.ctx(&mut sure, 2, 0), &props);
        assert_eq!(bench.at(2, 0), Some("ice"));
    }
}
