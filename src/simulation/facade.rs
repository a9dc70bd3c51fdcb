use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::domain::materials::MaterialId;
use crate::systems::achievements::AchievementTracker;

use super::settings::EngineSettings;
use super::WorldCore;

/// Value written to the type snapshot for empty cells
pub const EMPTY_CELL: u8 = u8::MAX;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    achievements: AchievementTracker,
}

impl World {
    fn wrap(core: WorldCore) -> Self {
        let achievements = AchievementTracker::builtin(core.content());
        Self { core, achievements }
    }

    fn id(&self, key: &str) -> Option<MaterialId> {
        self.core.content().id_by_key(key)
    }
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::wrap(WorldCore::new(width, height))
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::wrap(WorldCore::with_seed(width, height, seed))
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<World, JsValue> {
        let settings = EngineSettings::from_json(json).map_err(to_js)?;
        let core = WorldCore::from_settings(&settings).map_err(to_js)?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    // === CONTENT ===

    pub fn load_content_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_content_bundle_json(&json).map_err(to_js)?;
        self.achievements = AchievementTracker::builtin(self.core.content());
        Ok(())
    }

    pub fn get_content_manifest_json(&self) -> String {
        self.core.content_manifest_json()
    }

    pub fn material_id(&self, key: &str) -> Option<u8> {
        self.id(key).map(|id| id.0)
    }

    // === PARTICLES ===

    pub fn create_particle(&mut self, x: i32, y: i32, key: &str) -> bool {
        self.core.create_particle_by_key(x, y, key)
    }

    pub fn create_particle_id(&mut self, x: i32, y: i32, id: u8) -> bool {
        self.core.create_particle(x, y, MaterialId(id))
    }

    pub fn remove_particle(&mut self, x: i32, y: i32) -> bool {
        self.core.remove_particle(x, y)
    }

    pub fn paint(&mut self, cx: i32, cy: i32, radius: i32, key: &str) -> u32 {
        match self.id(key) {
            Some(id) => self.core.paint(cx, cy, radius, id),
            None => 0,
        }
    }

    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.erase(cx, cy, radius)
    }

    pub fn clear(&mut self) {
        self.core.clear_all();
    }

    /// Material id at (x, y), or `EMPTY_CELL`
    pub fn material_at(&self, x: i32, y: i32) -> u8 {
        self.core
            .query_cell(x, y)
            .map_or(EMPTY_CELL, |(id, _)| id.0)
    }

    /// Remaining life as a fraction of full life; 0 for empty cells
    pub fn life_fraction_at(&self, x: i32, y: i32) -> f32 {
        self.core.query_cell(x, y).map_or(0.0, |(_, f)| f)
    }

    /// Row-major material ids, `EMPTY_CELL` for empty cells
    pub fn types(&self) -> js_sys::Uint8Array {
        let ids: Vec<u8> = self
            .core
            .grid()
            .cells()
            .iter()
            .map(|c| c.material.map_or(EMPTY_CELL, |m| m.0))
            .collect();
        js_sys::Uint8Array::from(ids.as_slice())
    }

    /// Row-major life fractions for fading materials
    pub fn life_fractions(&self) -> js_sys::Float32Array {
        let content = self.core.content();
        let fractions: Vec<f32> = self
            .core
            .grid()
            .cells()
            .iter()
            .map(|c| c.material.map_or(0.0, |m| content.life_fraction(m, c.life)))
            .collect();
        js_sys::Float32Array::from(fractions.as_slice())
    }

    pub fn placed_count(&self, key: &str) -> f64 {
        self.id(key).map_or(0.0, |id| self.core.placed_count(id) as f64)
    }

    pub fn exploded_count(&self, key: &str) -> f64 {
        self.id(key).map_or(0.0, |id| self.core.exploded_count(id) as f64)
    }

    pub fn apply_explosion(&mut self, x: i32, y: i32, radius: i32) {
        self.core.apply_explosion(x, y, radius);
    }

    // === RIGID BODIES ===

    pub fn add_rigid_body(&mut self, shape: &str, material: &str, x: f32, y: f32) -> Result<u32, JsValue> {
        self.core.add_rigid_body(shape, material, x, y).map_err(to_js)
    }

    pub fn remove_rigid_body(&mut self, id: u32) -> bool {
        self.core.remove_rigid_body(id)
    }

    pub fn select_rigid_body_at(&mut self, x: i32, y: i32) -> Option<u32> {
        self.core.select_rigid_body_at(x, y)
    }

    pub fn deselect_rigid_body(&mut self) {
        self.core.deselect_rigid_body();
    }

    pub fn set_rigid_body_gravity(&mut self, id: u32, enabled: bool) -> bool {
        self.core.set_rigid_body_gravity(id, enabled)
    }

    pub fn apply_rigid_body_force(&mut self, id: u32, fx: f32, fy: f32) -> bool {
        self.core.apply_rigid_body_force(id, fx, fy)
    }

    pub fn drag_rigid_body(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.drag_rigid_body(id, x, y)
    }

    pub fn rigid_body_count(&self) -> usize {
        self.core.rigid_body_count()
    }

    /// Ids of every body, in storage order
    pub fn rigid_body_ids(&self) -> Vec<u32> {
        self.core.rigid_bodies().iter().map(|b| b.id).collect()
    }

    /// Footprint of a body as flat `[x0, y0, x1, y1, ...]`
    pub fn rigid_body_cells(&self, id: u32) -> js_sys::Int32Array {
        let flat: Vec<i32> = self
            .core
            .rigid_bodies()
            .get(id)
            .map(|b| b.world_cells().into_iter().flat_map(|(x, y)| [x, y]).collect())
            .unwrap_or_default();
        js_sys::Int32Array::from(flat.as_slice())
    }

    pub fn save_rigid_bodies(&self) -> String {
        self.core.rigid_bodies_json()
    }

    pub fn restore_rigid_bodies(&mut self, json: &str) -> Result<usize, JsValue> {
        self.core.restore_rigid_bodies_json(json).map_err(to_js)
    }

    // === ACHIEVEMENTS ===

    /// Advance notification timers by `dt` seconds
    pub fn update_achievements(&mut self, dt: f32) {
        self.achievements.update(dt);
    }

    pub fn achievement_notifications_json(&self) -> String {
        self.achievements.notifications_json()
    }

    pub fn is_achievement_unlocked(&self, key: &str) -> bool {
        self.achievements.is_unlocked(key)
    }

    // === STEP ===

    /// One simulation tick, then an achievement check against the counters
    pub fn tick(&mut self) {
        self.core.tick();
        self.achievements.check(self.core.counters());
    }
}
