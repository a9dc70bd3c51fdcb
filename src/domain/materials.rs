//! Material definitions.
//!
//! A `Material` is immutable once the registry has loaded it. Optional behaviors are
//! explicit `Option` fields resolved at load time, so rules never look anything up
//! by string while the simulation runs.

use serde::{Deserialize, Serialize};

use crate::core::random::RandomSource;

/// Index into the material registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialId(pub u8);

impl MaterialId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a material relocates each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementClass {
    Solid,
    Powder,
    Liquid,
    Rising,
    Gas,
}

/// Density every Solid-class material is pinned to; nothing displaces it
pub const SOLID_DENSITY: f32 = 1.0e9;
/// Density of a material whose definition omits it
pub const DEFAULT_DENSITY: f32 = 1.0;
/// Ignition scalar / burn multiplier when a flaming or flammable material omits it
pub const DEFAULT_BURN: f32 = 0.01;
/// Life of a freshly electrified cell
pub const PULSE_LIFE: i32 = 2;
/// Life a conductor gets when electricity leaves it; blocks re-triggering until it runs out
pub const CONDUCTION_COOLDOWN: i32 = 10;

/// Lifetime length in ticks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeSpan {
    Fixed(i32),
    Range { min: i32, max: i32 },
}

impl LifeSpan {
    /// Draw a starting life (uniform over the range, inclusive)
    pub fn draw(&self, rng: &mut dyn RandomSource) -> i32 {
        match *self {
            LifeSpan::Fixed(ticks) => ticks,
            LifeSpan::Range { min, max } => rng.range_inclusive(min, max),
        }
    }
}

/// What happens when a lifetime runs out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    Die,
    Become(MaterialId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lifetime {
    pub span: LifeSpan,
    /// Reference life for the life fraction reported to renderers
    pub full: i32,
    pub on_expire: Expiry,
    /// Whether renderers fade the cell out as it ages
    pub fades: bool,
}

/// Present on flammable materials
#[derive(Clone, Debug, PartialEq)]
pub struct Combustion {
    /// Multiplied with the source's ignition scalar to get the per-tick ignition chance
    pub susceptibility: f32,
    /// What this material burns into instead of fire (takes precedence over the source's)
    pub burns_into: Option<MaterialId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Corrosion {
    pub exclude: Vec<MaterialId>,
}

/// The material turns into `into` while any neighbor is one of `triggers`
#[derive(Clone, Debug, PartialEq)]
pub struct Transmutation {
    pub triggers: Vec<MaterialId>,
    pub into: MaterialId,
}

#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    pub name: String,
    pub label: String,
    pub description: String,
    pub movement: MovementClass,
    pub density: f32,
    /// Ignition scalar; `Some` only for flaming sources
    pub ignition: Option<f32>,
    /// `Some` only for flammable materials
    pub combustion: Option<Combustion>,
    /// What a flaming source turns its victims into when they don't say otherwise
    pub override_my_burn: Option<MaterialId>,
    pub lifetime: Option<Lifetime>,
    pub corrosion: Option<Corrosion>,
    pub clone_into: Option<MaterialId>,
    pub shatter_into: Option<MaterialId>,
    /// Detonation radius when ignited
    pub explode_radius: Option<i32>,
    pub transmute: Option<Transmutation>,
    pub conductive: bool,
    /// Explosions never set this material on fire
    pub explosion_immune: bool,
    pub color: [u8; 3],
}

impl Material {
    #[inline]
    pub fn is_flammable(&self) -> bool {
        self.combustion.is_some()
    }

    #[inline]
    pub fn is_flaming(&self) -> bool {
        self.ignition.is_some()
    }

    /// Color packed as ABGR (little-endian RGBA bytes), opaque
    pub fn color_abgr(&self) -> u32 {
        let [r, g, b] = self.color;
        0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
    }
}
