//! Behaviors - movement rules, one per movement class
//!
//! Every behavior moves the visited cell at most once per tick, through `Grid::swap`, into
//! an empty neighbor or one holding a strictly less dense material.

mod gas;
mod liquid;
mod powder;
mod rising;

pub use gas::GasBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;
pub use rising::RisingBehavior;

use crate::core::grid::Grid;
use crate::core::random::RandomSource;
use crate::domain::content::MaterialRegistry;
use crate::domain::counters::MaterialCounters;
use crate::domain::materials::{MaterialId, MovementClass};
use crate::systems::rigid_body_system::RigidBodySystem;

/// Everything a rule may touch while visiting the cell at (x, y)
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub content: &'a MaterialRegistry,
    pub counters: &'a mut MaterialCounters,
    pub bodies: &'a mut RigidBodySystem,
    pub rng: &'a mut dyn RandomSource,
    pub x: i32,
    pub y: i32,
}

impl<'a> UpdateContext<'a> {
    /// Material at an offset from the visited cell
    #[inline]
    pub fn neighbor(&self, dx: i32, dy: i32) -> Option<MaterialId> {
        self.grid.material_at(self.x + dx, self.y + dy)
    }

    /// Material currently in the visited cell
    #[inline]
    pub fn current(&self) -> Option<MaterialId> {
        self.grid.material_at(self.x, self.y)
    }

    /// Rule-driven type change with fresh life
    #[inline]
    pub fn replace(&mut self, x: i32, y: i32, material: MaterialId) {
        self.grid.replace(x, y, material, self.content, &mut *self.rng);
    }

    /// Whether a mover of `density` may enter (x, y)
    #[inline]
    pub fn can_displace(&self, x: i32, y: i32, density: f32) -> bool {
        let Some(cell) = self.grid.get(x, y) else {
            return false;
        };
        match cell.material {
            None => true,
            Some(occupant) => {
                self.content.movement(occupant) != MovementClass::Solid
                    && self.content.density(occupant) < density
            }
        }
    }

    /// Try each offset in order and swap into the first one that accepts the mover
    pub fn try_moves(&mut self, density: f32, offsets: &[(i32, i32)]) -> bool {
        for &(dx, dy) in offsets {
            let (nx, ny) = (self.x + dx, self.y + dy);
            if self.can_displace(nx, ny, density) {
                self.grid.swap(self.x, self.y, nx, ny);
                return true;
            }
        }
        false
    }

    /// The pair in random order
    #[inline]
    pub fn random_pair(&mut self, a: (i32, i32), b: (i32, i32)) -> [(i32, i32); 2] {
        if self.rng.chance(0.5) {
            [a, b]
        } else {
            [b, a]
        }
    }
}

/// Behavior trait - each movement class implements this
pub trait Behavior {
    /// Move the visited cell (density `density`) at most once
    fn update(&self, ctx: &mut UpdateContext, density: f32);
}

/// Behavior registry - dispatch by movement class
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    rising: RisingBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior,
            liquid: LiquidBehavior,
            rising: RisingBehavior,
            gas: GasBehavior,
        }
    }

    /// Move whatever occupies the visited cell now; empty cells and solids stay put
    pub fn update(&self, ctx: &mut UpdateContext) {
        let Some(material) = ctx.current() else {
            return;
        };
        let Some(props) = ctx.content.get(material) else {
            return;
        };
        let density = props.density;
        match props.movement {
            MovementClass::Solid => {}
            MovementClass::Powder => self.powder.update(ctx, density),
            MovementClass::Liquid => self.liquid.update(ctx, density),
            MovementClass::Rising => self.rising.update(ctx, density),
            MovementClass::Gas => self.gas.update(ctx, density),
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::systems::rigid_body_system::BodyPhysics;

    /// Random source that replays fixed answers
    pub struct Scripted {
        pub uniform: f32,
        pub below: usize,
    }

    impl RandomSource for Scripted {
        fn uniform(&mut self) -> f32 {
            self.uniform
        }

        fn below(&mut self, n: usize) -> usize {
            self.below.min(n.saturating_sub(1))
        }
    }

    /// Grid, registry, counters and bodies for driving a single rule by hand
    pub struct Bench {
        pub grid: Grid,
        pub content: MaterialRegistry,
        pub counters: MaterialCounters,
        pub bodies: RigidBodySystem,
    }

    impl Bench {
        pub fn new(width: u32, height: u32) -> Self {
            Self::with_content(width, height, MaterialRegistry::builtin())
        }

        pub fn with_content(width: u32, height: u32, content: MaterialRegistry) -> Self {
            let counters = MaterialCounters::new(content.len());
            Self {
                grid: Grid::new(width, height),
                content,
                counters,
                bodies: RigidBodySystem::new(BodyPhysics::default()),
            }
        }

        pub fn id(&self, key: &str) -> MaterialId {
            self.content.id_by_key(key).unwrap()
        }

        pub fn put(&mut self, x: i32, y: i32, key: &str, rng: &mut dyn RandomSource) {
            let id = self.id(key);
            self.grid
                .create(x, y, id, &self.content, &mut self.counters, rng);
        }

        pub fn at(&self, x: i32, y: i32) -> Option<&str> {
            self.grid
                .material_at(x, y)
                .and_then(|m| self.content.get(m))
                .map(|m| m.key.as_str())
        }

        pub fn ctx<'a>(&'a mut self, rng: &'a mut dyn RandomSource, x: i32, y: i32) -> UpdateContext<'a> {
            UpdateContext {
                grid: &mut self.grid,
                content: &self.content,
                counters: &mut self.counters,
                bodies: &mut self.bodies,
                rng,
                x,
                y,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{Bench, Scripted};
    use super::*;

    #[test]
    fn solids_never_move() {
        let mut bench = Bench::new(3, 3);
        let mut rng = Scripted { uniform: 0.0, below: 0 };
        bench.put(1, 0, "wall", &mut rng);
        BehaviorRegistry::new().update(&mut bench.ctx(&mut rng, 1, 0));
        assert_eq!(bench.at(1, 0), Some("wall"));
    }

    #[test]
    fn heavier_sinks_through_lighter() {
        let mut bench = Bench::new(1, 2);
        let mut rng = Scripted { uniform: 0.0, below: 0 };
        bench.put(0, 0, "sand", &mut rng);
        bench.put(0, 1, "water", &mut rng);
        BehaviorRegistry::new().update(&mut bench.ctx(&mut rng, 0, 0));
        assert_eq!(bench.at(0, 1), Some("sand"));
        assert_eq!(bench.at(0, 0), Some("water"));
    }

    #[test]
    fn equal_density_does_not_swap() {
        let mut bench = Bench::new(1, 2);
        let mut rng = Scripted { uniform: 0.0, below: 0 };
        bench.put(0, 0, "sand", &mut rng);
        bench.put(0, 1, "sand", &mut rng);
        let ctx = bench.ctx(&mut rng, 0, 0);
        assert!(!ctx.can_displace(0, 1, 5.0));
    }

    #[test]
    fn solid_occupant_is_never_displaced() {
        let mut bench = Bench::new(1, 2);
        let mut rng = Scripted { uniform: 0.0, below: 0 };
        bench.put(0, 1, "wood", &mut rng);
        let ctx = bench.ctx(&mut rng, 0, 0);
        assert!(!ctx.can_displace(0, 1, f32::MAX));
        assert!(!ctx.can_displace(0, 2, 1.0));
    }
}
