//! Random source injected into the engine.
//!
//! Gameplay probabilities and traversal order both draw from the same source, so swapping
//! in a seeded generator replays a session exactly.

use rand::{Rng, RngCore};

pub trait RandomSource {
    /// Uniform float in [0, 1)
    fn uniform(&mut self) -> f32;

    /// Uniform integer in [0, n). `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    /// True with probability `p`
    #[inline]
    fn chance(&mut self, p: f32) -> bool {
        self.uniform() < p
    }

    /// Uniform integer in [lo, hi] (swapped bounds are tolerated)
    #[inline]
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = (hi - lo) as usize + 1;
        lo + self.below(span) as i32
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn uniform(&mut self) -> f32 {
        self.gen::<f32>()
    }

    #[inline]
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n.max(1))
    }
}

/// Fisher-Yates shuffle driven by a `RandomSource`.
///
/// `SliceRandom::shuffle` needs a sized `Rng`; the tick pass holds a `dyn RandomSource`,
/// which may be a scripted source with no `RngCore` behind it.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
