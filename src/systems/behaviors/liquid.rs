//! LiquidBehavior - falls, then slides diagonally, then spreads sideways

use super::{Behavior, UpdateContext};

pub struct LiquidBehavior;

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext, density: f32) {
        if ctx.try_moves(density, &[(0, 1)]) {
            return;
        }
        let diagonals = ctx.random_pair((-1, 1), (1, 1));
        if ctx.try_moves(density, &diagonals) {
            return;
        }
        let sideways = ctx.random_pair((-1, 0), (1, 0));
        ctx.try_moves(density, &sideways);
    }
}
