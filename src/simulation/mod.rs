//! World - falling-sand simulation orchestrator
//!
//! `WorldCore` owns the grid, the material registry, the counters, the rigid bodies and
//! the random source. It only orchestrates: movement lives in `systems::behaviors`,
//! interactions in `systems::reactions`, expiry in `systems::lifetime`, bodies in
//! `systems::rigid_body_system`.
//!
//! Callers never get mutable grid access. Every cell mutation goes through the commands
//! below or through a tick.

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::grid::{Cell, Grid};
use crate::core::random::RandomSource;
use crate::domain::content::MaterialRegistry;
use crate::domain::counters::MaterialCounters;
use crate::domain::materials::MaterialId;
use crate::domain::shapes::{RigidMaterial, RigidShape};
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::rigid_body_system::{BodyPhysics, RigidBodySystem};

#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use settings::EngineSettings;

/// The simulation world
pub struct WorldCore {
    content: Arc<MaterialRegistry>,
    grid: Grid,
    counters: MaterialCounters,
    behaviors: BehaviorRegistry,
    rigid_bodies: RigidBodySystem,
    rng: Box<dyn RandomSource>,
    frame: u64,
}

impl WorldCore {
    /// Create a world of the given size with the built-in materials and an
    /// entropy-seeded random source
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, init::entropy_rng())
    }

    /// Same as `new` but replayable: equal seeds and equal inputs give equal worlds
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        init::create_world_core(width, height, init::seeded_rng(seed))
    }

    /// Create a world driven by a caller-supplied random source
    pub fn with_rng(width: u32, height: u32, rng: Box<dyn RandomSource>) -> Self {
        init::create_world_core(width, height, rng)
    }

    pub fn from_settings(settings: &EngineSettings) -> Result<Self> {
        init::create_from_settings(settings)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particle_count(&self) -> usize {
        self.grid.particle_count()
    }

    pub fn content(&self) -> &MaterialRegistry {
        &self.content
    }

    /// Shared handle to the current registry (collaborators such as the achievement
    /// tracker resolve keys against it)
    pub fn content_handle(&self) -> Arc<MaterialRegistry> {
        Arc::clone(&self.content)
    }

    pub fn counters(&self) -> &MaterialCounters {
        &self.counters
    }

    /// Read-only view of the grid for renderers
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // === CONTENT ===

    /// Replace the material registry. Clears the grid and resets the counters.
    pub fn load_content_bundle_json(&mut self, json: &str) -> Result<()> {
        commands::load_content_bundle(self, json)
    }

    pub fn content_manifest_json(&self) -> String {
        self.content.manifest_json()
    }

    // === PARTICLES ===

    /// Place `material` at (x, y). Returns true when the placement was counted.
    pub fn create_particle(&mut self, x: i32, y: i32, material: MaterialId) -> bool {
        commands::create_particle(self, x, y, material)
    }

    /// Place a material by key; unknown keys place nothing
    pub fn create_particle_by_key(&mut self, x: i32, y: i32, key: &str) -> bool {
        match self.content.id_by_key(key) {
            Some(id) => commands::create_particle(self, x, y, id),
            None => false,
        }
    }

    /// Empty the cell at (x, y). Returns true when something was removed.
    pub fn remove_particle(&mut self, x: i32, y: i32) -> bool {
        commands::remove_particle(self, x, y)
    }

    /// Brush: place `material` over a filled disc. Returns the number of counted placements.
    pub fn paint(&mut self, cx: i32, cy: i32, radius: i32, material: MaterialId) -> u32 {
        commands::paint_disc(self, cx, cy, radius, material)
    }

    /// Brush: empty every cell of a filled disc. Returns the number of removed particles.
    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        commands::erase_disc(self, cx, cy, radius)
    }

    /// Clear all particles and bodies. Counters are session totals and survive.
    pub fn clear_all(&mut self) {
        commands::clear(self)
    }

    /// Copy of the cell at (x, y); out of bounds reads as empty
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.grid.cell(x, y)
    }

    /// Occupant of (x, y) and its remaining life as a fraction of the material's full life
    /// (1.0 for materials without a lifetime)
    pub fn query_cell(&self, x: i32, y: i32) -> Option<(MaterialId, f32)> {
        commands::query_cell(self, x, y)
    }

    pub fn placed_count(&self, material: MaterialId) -> u64 {
        self.counters.placed(material)
    }

    pub fn exploded_count(&self, material: MaterialId) -> u64 {
        self.counters.exploded(material)
    }

    pub fn expired_count(&self, material: MaterialId) -> u64 {
        self.counters.expired(material)
    }

    pub fn corroded_count(&self, material: MaterialId) -> u64 {
        self.counters.corroded(material)
    }

    /// Set off an explosion centered on (x, y): shatters, ignites and pushes bodies
    pub fn apply_explosion(&mut self, x: i32, y: i32, radius: i32) {
        rigid::apply_explosion(self, x, y, radius)
    }

    // === RIGID BODY API ===

    /// Add a body by shape and material key. Unknown keys are an error.
    pub fn add_rigid_body(&mut self, shape: &str, material: &str, x: f32, y: f32) -> Result<u32> {
        rigid::add_rigid_body(self, shape, material, x, y)
    }

    pub fn add_rigid_body_of(&mut self, shape: RigidShape, material: RigidMaterial, x: f32, y: f32) -> u32 {
        self.rigid_bodies.add(shape, material, x, y)
    }

    pub fn remove_rigid_body(&mut self, id: u32) -> bool {
        self.rigid_bodies.remove(id)
    }

    /// Select the first body covering (x, y); any previous selection is dropped
    pub fn select_rigid_body_at(&mut self, x: i32, y: i32) -> Option<u32> {
        self.rigid_bodies.select_at(x, y)
    }

    pub fn deselect_rigid_body(&mut self) {
        self.rigid_bodies.deselect()
    }

    pub fn set_rigid_body_gravity(&mut self, id: u32, enabled: bool) -> bool {
        self.rigid_bodies.set_gravity(id, enabled)
    }

    pub fn apply_rigid_body_force(&mut self, id: u32, fx: f32, fy: f32) -> bool {
        self.rigid_bodies.apply_force(id, fx, fy)
    }

    /// Move a body to (x, y) and stop it
    pub fn drag_rigid_body(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.rigid_bodies.drag(id, x, y)
    }

    pub fn rigid_body_count(&self) -> usize {
        self.rigid_bodies.len()
    }

    pub fn rigid_bodies(&self) -> &RigidBodySystem {
        &self.rigid_bodies
    }

    pub fn rigid_bodies_json(&self) -> String {
        self.rigid_bodies.snapshot_json()
    }

    /// Replace every body with the ones in a saved snapshot. Returns how many were restored.
    pub fn restore_rigid_bodies_json(&mut self, json: &str) -> Result<usize> {
        self.rigid_bodies.restore_json(json)
    }

    // === SETTINGS ===

    pub fn body_physics(&self) -> &BodyPhysics {
        self.rigid_bodies.physics()
    }

    pub fn set_body_physics(&mut self, physics: BodyPhysics) {
        settings::set_body_physics(self, physics)
    }

    /// Current settings, as they would be saved
    pub fn settings(&self) -> EngineSettings {
        settings::current_settings(self)
    }

    // === STEP ===

    /// Advance one tick: lifetime decay, shuffled interaction and movement pass, then
    /// rigid-body integration
    pub fn tick(&mut self) {
        step::step(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
