//! Transmutation on presence: the cell becomes its target while touching a trigger.

use crate::core::grid::NEIGHBORS;
use crate::domain::materials::Material;
use crate::systems::behaviors::UpdateContext;

pub(super) fn update(ctx: &mut UpdateContext, props: &Material) {
    let Some(transmute) = props.transmute.as_ref() else {
        return;
    };
    let touching = NEIGHBORS.iter().any(|&(dx, dy)| {
        ctx.neighbor(dx, dy)
            .is_some_and(|n| transmute.triggers.contains(&n))
    });
    if touching {
        let (x, y) = (ctx.x, ctx.y);
        ctx.replace(x, y, transmute.into);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::behaviors::test_support::{Bench, Scripted};

    #[test]
    fn wet_dirt_turns_to_mud() {
        let mut bench = Bench::new(2, 2);
        let mut rng = Scripted { uniform: 0.5, below: 0 };
        bench.put(0, 0, "dirt", &mut rng);
        bench.put(1, 1, "water", &mut rng);
        let props = bench.content.get(bench.id("dirt")).unwrap().clone();
        update(&mut bench.ctx(&mut rng, 0, 0), &props);
        assert_eq!(bench.at(0, 0), Some("mud"));
    }

    #[test]
    fn dry_dirt_stays() {
        let mut bench = Bench::new(2, 2);
        let mut rng = Scripted { uniform: 0.5, below: 0 };
        bench.put(0, 0, "dirt", &mut rng);
        bench.put(1, 1, "sand", &mut rng);
        let props = bench.content.get(bench.id("dirt")).unwrap().clone();
        update(&mut bench.ctx(&mut rng, 0, 0), &props);
        assert_eq!(bench.at(0, 0), Some("dirt"));
    }
}
