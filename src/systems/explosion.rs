//! Explosions: shatter or ignite every cell in a disc and shove nearby bodies.

use crate::systems::behaviors::UpdateContext;

/// Chance that a non-shattering, non-immune cell in the blast catches fire
pub const IGNITE_CHANCE: f32 = 0.1;

/// Detonate at (cx, cy).
///
/// Cells within Euclidean `radius` with a shatter target turn into it and count as
/// exploded. Every other cell, empty ones included, catches fire with `IGNITE_CHANCE`
/// unless its material is explosion immune. Bodies in range take an impulse.
pub fn explode(ctx: &mut UpdateContext, cx: i32, cy: i32, radius: i32) {
    ctx.bodies
        .apply_explosion(cx as f32, cy as f32, radius as f32, &mut *ctx.rng);

    let content = ctx.content;
    let fire = content.roles().fire;
    for (nx, ny) in ctx.grid.disc(cx, cy, radius) {
        let occupant = ctx.grid.material_at(nx, ny);

        let shatter = occupant
            .and_then(|m| content.get(m))
            .and_then(|m| m.shatter_into.map(|into| (m.id, into)));
        if let Some((material, into)) = shatter {
            ctx.counters.record_exploded(material);
            ctx.replace(nx, ny, into);
            continue;
        }

        if ctx.rng.chance(IGNITE_CHANCE)
            && !occupant.is_some_and(|m| content.is_explosion_immune(m))
        {
            ctx.replace(nx, ny, fire);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shapes::{RigidMaterial, RigidShape};
    use crate::systems::behaviors::test_support::{Bench, Scripted};

    #[test]
    fn rock_in_range_shatters_once() {
        let mut bench = Bench::new(11, 11);
        let mut rng = Scripted { uniform: 0.99, below: 0 };
        bench.put(8, 5, "rock", &mut rng);
        bench.put(10, 10, "rock", &mut rng);
        explode(&mut bench.ctx(&mut rng, 5, 5), 5, 5, 3);
        assert_eq!(bench.at(8, 5), Some("stone"));
        assert_eq!(bench.at(10, 10), Some("rock"));
        assert_eq!(bench.counters.exploded(bench.id("rock")), 1);
    }

    #[test]
    fn certain_ignition_skips_immune_cells() {
        let mut bench = Bench::new(5, 5);
        let mut rng = Scripted { uniform: 0.0, below: 0 };
        bench.put(2, 2, "wall", &mut rng);
        bench.put(2, 3, "sand", &mut rng);
        explode(&mut bench.ctx(&mut rng, 2, 2), 2, 2, 1);
        assert_eq!(bench.at(2, 2), Some("wall"));
        assert_eq!(bench.at(2, 3), Some("fire"));
        // empty cells in the blast catch fire too
        assert_eq!(bench.at(1, 2), Some("fire"));
        // corners are outside radius 1
        assert_eq!(bench.at(1, 1), None);
    }

    #[test]
    fn huge_radius_covers_a_small_grid() {
        let mut bench = Bench::new(4, 4);
        let mut rng = Scripted { uniform: 0.0, below: 0 };
        bench.put(3, 3, "rock", &mut rng);
        explode(&mut bench.ctx(&mut rng, 1, 1), 1, 1, 50_000);
        assert_eq!(bench.at(3, 3), Some("stone"));
        assert_eq!(bench.at(0, 0), Some("fire"));
        assert_eq!(bench.grid.particle_count(), 16);
    }

    #[test]
    fn bodies_in_range_are_pushed() {
        let mut bench = Bench::new(20, 20);
        let id = bench
            .bodies
            .add(RigidShape::Box, RigidMaterial::WoodBlock, 12.0, 10.0);
        let mut rng = Scripted { uniform: 0.99, below: 0 };
        explode(&mut bench.ctx(&mut rng, 10, 10), 10, 10, 5);
        assert!(bench.bodies.get(id).unwrap().force.x > 0.0);
    }
}
