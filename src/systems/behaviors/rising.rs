//! RisingBehavior - powder mirrored upward (fire, smoke, steam)

use super::{Behavior, UpdateContext};

pub struct RisingBehavior;

impl Behavior for RisingBehavior {
    fn update(&self, ctx: &mut UpdateContext, density: f32) {
        if ctx.try_moves(density, &[(0, -1)]) {
            return;
        }
        let diagonals = ctx.random_pair((-1, -1), (1, -1));
        ctx.try_moves(density, &diagonals);
    }
}
