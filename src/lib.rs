//! Sandfall Engine - falling-sand cell simulation with rigid bodies
//!
//! Architecture:
//! - core/        - grid store, random source, errors
//! - domain/      - material registry, counters, rigid shapes and materials
//! - systems/     - movement, interactions, lifetime, explosions, bodies, achievements
//! - simulation/  - `WorldCore` orchestration and the wasm `World` facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandfall engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::EngineError;
pub use crate::core::grid::{Cell, Grid};
pub use crate::core::random::RandomSource;
pub use domain::content::{MaterialRegistry, Roles};
pub use domain::counters::MaterialCounters;
pub use domain::materials::{Material, MaterialId, MovementClass};
pub use domain::shapes::{RigidMaterial, RigidShape};
pub use simulation::{EngineSettings, World, WorldCore};
pub use systems::achievements::AchievementTracker;
pub use systems::rigid_body::RigidBody;
pub use systems::rigid_body_system::{BodyPhysics, BodySnapshot, RigidBodySystem};
