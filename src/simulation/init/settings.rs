//! Engine settings
//!
//! Grid size and seed are fixed at construction; the body physics values can also be
//! changed at runtime.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::systems::rigid_body_system::BodyPhysics;

use super::WorldCore;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    pub width: u32,
    pub height: u32,
    /// `None` seeds from entropy
    pub seed: Option<u64>,
    pub body_timestep: f32,
    pub body_gravity: f32,
    pub body_damping: f32,
    pub explosion_force_factor: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let physics = BodyPhysics::default();
        Self {
            width: 160,
            height: 96,
            seed: None,
            body_timestep: physics.timestep,
            body_gravity: physics.gravity,
            body_damping: physics.damping,
            explosion_force_factor: physics.explosion_force_factor,
        }
    }
}

impl EngineSettings {
    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn body_physics(&self) -> BodyPhysics {
        BodyPhysics {
            timestep: self.body_timestep,
            gravity: self.body_gravity,
            damping: self.body_damping,
            explosion_force_factor: self.explosion_force_factor,
        }
    }
}

pub(super) fn set_body_physics(world: &mut WorldCore, physics: BodyPhysics) {
    world.rigid_bodies.set_physics(physics);
}

pub(super) fn current_settings(world: &WorldCore) -> EngineSettings {
    let physics = world.rigid_bodies.physics();
    EngineSettings {
        width: world.grid.width(),
        height: world.grid.height(),
        seed: None,
        body_timestep: physics.timestep,
        body_gravity: physics.gravity,
        body_damping: physics.damping,
        explosion_force_factor: physics.explosion_force_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = EngineSettings::from_json(r#"{"width": 32, "seed": 7}"#).unwrap();
        assert_eq!(settings.width, 32);
        assert_eq!(settings.height, EngineSettings::default().height);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.body_physics(), BodyPhysics::default());
    }

    #[test]
    fn physics_fields_are_camel_case() {
        let settings = EngineSettings::from_json(r#"{"bodyGravity": 3.5, "explosionForceFactor": 1.0}"#).unwrap();
        let physics = settings.body_physics();
        assert_eq!(physics.gravity, 3.5);
        assert_eq!(physics.explosion_force_factor, 1.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EngineSettings::from_json("{width: }").is_err());
    }
}
