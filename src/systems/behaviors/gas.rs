//! GasBehavior - drifts into a random neighbor

use super::{Behavior, UpdateContext};
use crate::core::grid::NEIGHBORS;
use crate::core::random::shuffle;

pub struct GasBehavior;

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext, density: f32) {
        let mut dirs = NEIGHBORS;
        shuffle(&mut *ctx.rng, &mut dirs);
        ctx.try_moves(density, &dirs);
    }
}
