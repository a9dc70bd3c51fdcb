//! Reactions - interaction rules run for a visited cell before it moves
//!
//! Rules are chosen by the material the cell held when it was visited and run in a fixed
//! order. Once a rule changes that cell's material the remaining rules are skipped.

mod clone;
mod combustion;
mod corrosion;
mod electricity;
mod ice;
mod plant;
mod transmute;
mod water;

use crate::domain::materials::{Material, MaterialId};
use crate::systems::behaviors::UpdateContext;

type Rule = fn(&mut UpdateContext, &Material);

/// Run every interaction rule that applies to `material` at the visited cell
pub fn interact(ctx: &mut UpdateContext, material: MaterialId) {
    let content = ctx.content;
    let Some(props) = content.get(material) else {
        return;
    };
    let roles = content.roles();

    let rules: [(bool, Rule); 8] = [
        (roles.water == Some(material), water::update),
        (props.transmute.is_some(), transmute::update),
        (roles.electricity == Some(material), electricity::update),
        (roles.ice == Some(material), ice::update),
        (props.is_flaming(), combustion::update),
        (roles.plant == Some(material), plant::update),
        (props.corrosion.is_some(), corrosion::update),
        (props.clone_into.is_some(), clone::update),
    ];

    for (applies, rule) in rules {
        if !applies {
            continue;
        }
        rule(ctx, props);
        if ctx.current() != Some(material) {
            return;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::random::RandomSource;

    /// Cycles through fixed uniforms
    pub struct Sequence {
        pub values: Vec<f32>,
        pub next: usize,
    }

    impl Sequence {
        pub fn new(values: &[f32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Sequence {
        fn uniform(&mut self) -> f32 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }

        fn below(&mut self, _n: usize) -> usize {
            0
        }
    }
}
