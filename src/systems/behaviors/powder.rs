//! PowderBehavior - falls straight down, else slides down a diagonal

use super::{Behavior, UpdateContext};

pub struct PowderBehavior;

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext, density: f32) {
        if ctx.try_moves(density, &[(0, 1)]) {
            return;
        }
        let diagonals = ctx.random_pair((-1, 1), (1, 1));
        ctx.try_moves(density, &diagonals);
    }
}
