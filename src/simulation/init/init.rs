use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::error::{EngineError, Result};
use crate::core::grid::Grid;
use crate::core::random::RandomSource;
use crate::domain::content::MaterialRegistry;
use crate::domain::counters::MaterialCounters;
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::rigid_body_system::{BodyPhysics, RigidBodySystem};

use super::settings::EngineSettings;
use super::WorldCore;

pub(super) fn entropy_rng() -> Box<dyn RandomSource> {
    Box::new(StdRng::from_entropy())
}

pub(super) fn seeded_rng(seed: u64) -> Box<dyn RandomSource> {
    Box::new(StdRng::seed_from_u64(seed))
}

pub(super) fn create_world_core(width: u32, height: u32, rng: Box<dyn RandomSource>) -> WorldCore {
    build(width, height, BodyPhysics::default(), rng)
}

pub(super) fn create_from_settings(settings: &EngineSettings) -> Result<WorldCore> {
    if settings.width == 0 || settings.height == 0 {
        return Err(EngineError::InvalidDimensions {
            width: settings.width,
            height: settings.height,
        });
    }
    let rng = match settings.seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };
    Ok(build(settings.width, settings.height, settings.body_physics(), rng))
}

fn build(width: u32, height: u32, physics: BodyPhysics, rng: Box<dyn RandomSource>) -> WorldCore {
    let content = Arc::new(MaterialRegistry::builtin());
    WorldCore {
        counters: MaterialCounters::new(content.len()),
        content,
        grid: Grid::new(width, height),
        behaviors: BehaviorRegistry::new(),
        rigid_bodies: RigidBodySystem::new(physics),
        rng,
        frame: 0,
    }
}
