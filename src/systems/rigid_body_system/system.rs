use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::grid::Grid;
use crate::core::random::RandomSource;
use crate::domain::shapes::{RigidMaterial, RigidShape};
use crate::systems::rigid_body::{RigidBody, Vec2};

use super::collision::{constrain_to_bounds, displace_particle};

/// Tunables for body integration and explosion response
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyPhysics {
    /// Seconds per body step
    pub timestep: f32,
    /// Downward acceleration for bodies with gravity enabled
    pub gravity: f32,
    /// Velocity multiplier applied every step
    pub damping: f32,
    /// Scales the explosion impulse
    pub explosion_force_factor: f32,
}

impl Default for BodyPhysics {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            gravity: 9.81,
            damping: 0.98,
            explosion_force_factor: 0.3,
        }
    }
}

/// Explosion force is expressed in these units per unit of magnitude
const EXPLOSION_FORCE_SCALE: f32 = 1000.0;
const EXPLOSION_SPIN_SCALE: f32 = 0.1;

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    next_id: u32,
    physics: BodyPhysics,
}

impl RigidBodySystem {
    pub fn new(physics: BodyPhysics) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            physics,
        }
    }

    #[inline]
    pub fn physics(&self) -> &BodyPhysics {
        &self.physics
    }

    pub fn set_physics(&mut self, physics: BodyPhysics) {
        self.physics = physics;
    }

    /// Add a body and return its id
    pub fn add(&mut self, shape: RigidShape, material: RigidMaterial, x: f32, y: f32) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(RigidBody::new(id, shape, material, x, y));
        tracing::debug!(id, %shape, %material, x, y, "rigid body added");
        id
    }

    /// Add a body by shape and material key; unknown keys are an error
    pub fn add_by_key(&mut self, shape: &str, material: &str, x: f32, y: f32) -> Result<u32> {
        let shape: RigidShape = shape.parse()?;
        let material: RigidMaterial = material.parse()?;
        Ok(self.add(shape, material, x, y))
    }

    /// Remove a body by ID. Returns false if there was no such body.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(idx) = self.bodies.iter().position(|b| b.id == id) else {
            return false;
        };
        self.bodies.swap_remove(idx);
        tracing::debug!(id, "rigid body removed");
        true
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.iter()
    }

    pub fn get(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Select the body covering (x, y), dropping any previous selection
    pub fn select_at(&mut self, x: i32, y: i32) -> Option<u32> {
        self.deselect();
        let body = self.bodies.iter_mut().find(|b| b.covers(x, y))?;
        body.selected = true;
        Some(body.id)
    }

    pub fn deselect(&mut self) {
        for body in self.bodies.iter_mut() {
            body.selected = false;
        }
    }

    pub fn selected(&self) -> Option<u32> {
        self.bodies.iter().find(|b| b.selected).map(|b| b.id)
    }

    pub fn set_gravity(&mut self, id: u32, enabled: bool) -> bool {
        let Some(body) = self.get_mut(id) else {
            return false;
        };
        body.gravity_enabled = enabled;
        true
    }

    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> bool {
        let Some(body) = self.get_mut(id) else {
            return false;
        };
        body.apply_force(Vec2::new(fx, fy));
        true
    }

    /// Move a body to (x, y) and stop it
    pub fn drag(&mut self, id: u32, x: f32, y: f32) -> bool {
        let Some(body) = self.get_mut(id) else {
            return false;
        };
        body.pos = Vec2::new(x, y);
        body.velocity = Vec2::zero();
        body.angular_velocity = 0.0;
        true
    }

    /// One body step: integrate, push particles, then keep every body on the grid
    pub fn update(&mut self, grid: &mut Grid) {
        let physics = self.physics;
        for body in self.bodies.iter_mut() {
            body.integrate(&physics);

            if body.props().pushes_particles {
                for (x, y) in body.world_cells() {
                    if grid.get(x, y).is_some_and(|c| !c.is_empty()) {
                        displace_particle(body, grid, x, y);
                    }
                }
            }

            constrain_to_bounds(body, grid.width(), grid.height());
        }
    }

    /// Push every body within `radius` of (x, y) away from it.
    ///
    /// The push fades linearly to zero at the radius. A spin proportional to the
    /// perpendicular offset is added with a random sign.
    pub fn apply_explosion(&mut self, x: f32, y: f32, radius: f32, rng: &mut dyn RandomSource) {
        if radius <= 0.0 {
            return;
        }
        let factor = self.physics.explosion_force_factor;
        for body in self.bodies.iter_mut() {
            let dx = body.pos.x - x;
            let dy = body.pos.y - y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > radius {
                continue;
            }

            let magnitude = (1.0 - distance / radius) * factor;
            let angle = dy.atan2(dx);
            let (sin, cos) = angle.sin_cos();
            body.apply_force(Vec2::new(
                cos * magnitude * EXPLOSION_FORCE_SCALE,
                sin * magnitude * EXPLOSION_FORCE_SCALE,
            ));

            let perpendicular = (dx * (angle + std::f32::consts::FRAC_PI_2).cos()).abs();
            let spin = perpendicular * magnitude * EXPLOSION_SPIN_SCALE;
            body.angular_velocity += if rng.uniform() > 0.5 { spin } else { -spin };
        }
    }

    pub(super) fn bodies_mut(&mut self) -> &mut Vec<RigidBody> {
        &mut self.bodies
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new(BodyPhysics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Cell;
    use crate::domain::materials::MaterialId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sand() -> Cell {
        Cell {
            material: Some(MaterialId(0)),
            life: 0,
            conduction: None,
        }
    }

    #[test]
    fn add_by_key_fails_fast_on_unknown_keys() {
        let mut bodies = RigidBodySystem::default();
        assert!(bodies.add_by_key("box", "wood_block", 5.0, 5.0).is_ok());
        assert!(bodies.add_by_key("cube", "wood_block", 5.0, 5.0).is_err());
        assert!(bodies.add_by_key("box", "gold", 5.0, 5.0).is_err());
        assert_eq!(bodies.len(), 1);
    }

    #[test]
    fn ids_are_unique_and_removable() {
        let mut bodies = RigidBodySystem::default();
        let a = bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 5.0, 5.0);
        let b = bodies.add(RigidShape::Ball, RigidMaterial::Rubber, 15.0, 5.0);
        assert_ne!(a, b);
        assert!(bodies.remove(a));
        assert!(!bodies.remove(a));
        assert!(bodies.get(b).is_some());
    }

    #[test]
    fn selection_is_exclusive() {
        let mut bodies = RigidBodySystem::default();
        let a = bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 5.0, 5.0);
        let b = bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 20.0, 5.0);
        assert_eq!(bodies.select_at(4, 6), Some(a));
        assert_eq!(bodies.select_at(21, 4), Some(b));
        assert_eq!(bodies.selected(), Some(b));
        assert!(!bodies.get(a).unwrap().selected);
        assert_eq!(bodies.select_at(50, 50), None);
        assert_eq!(bodies.selected(), None);
    }

    #[test]
    fn drag_moves_and_stops() {
        let mut bodies = RigidBodySystem::default();
        let id = bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 5.0, 5.0);
        bodies.apply_force(id, 1000.0, 0.0);
        let mut grid = Grid::new(32, 32);
        bodies.update(&mut grid);
        assert!(bodies.drag(id, 10.0, 12.0));
        let body = bodies.get(id).unwrap();
        assert_eq!(body.pos, Vec2::new(10.0, 12.0));
        assert_eq!(body.velocity, Vec2::zero());
    }

    #[test]
    fn pushing_body_clears_its_footprint() {
        let mut grid = Grid::new(10, 10);
        grid.set_cell(5, 5, sand());
        let mut bodies = RigidBodySystem::default();
        bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 5.0, 5.0);
        bodies.update(&mut grid);
        assert!(grid.is_empty(5, 5));
        assert_eq!(grid.particle_count(), 1);
    }

    #[test]
    fn rubber_passes_over_particles() {
        let mut grid = Grid::new(10, 10);
        grid.set_cell(5, 5, sand());
        let mut bodies = RigidBodySystem::default();
        bodies.add(RigidShape::Box, RigidMaterial::Rubber, 5.0, 5.0);
        bodies.update(&mut grid);
        assert_eq!(grid.cell(5, 5), sand());
    }

    #[test]
    fn explosion_pushes_nearby_bodies_away() {
        let mut bodies = RigidBodySystem::default();
        let near = bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 12.0, 10.0);
        let far = bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 40.0, 10.0);
        let mut rng = StdRng::seed_from_u64(1);
        bodies.apply_explosion(10.0, 10.0, 5.0, &mut rng);

        let pushed = bodies.get(near).unwrap();
        // magnitude (1 - 2/5) * 0.3 = 0.18, along +x
        assert!((pushed.force.x - 180.0).abs() < 1e-3);
        assert!(pushed.force.y.abs() < 1e-3);
        assert_eq!(bodies.get(far).unwrap().force, Vec2::zero());
    }

    #[test]
    fn explosion_at_the_rim_has_no_force() {
        let mut bodies = RigidBodySystem::default();
        let id = bodies.add(RigidShape::Box, RigidMaterial::WoodBlock, 15.0, 10.0);
        let mut rng = StdRng::seed_from_u64(2);
        bodies.apply_explosion(10.0, 10.0, 5.0, &mut rng);
        assert!(bodies.get(id).unwrap().force.length() < 1e-4);
    }
}
