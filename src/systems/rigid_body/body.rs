use crate::domain::shapes::{BodyMaterialProps, RigidMaterial, RigidShape};

use super::vec2::Vec2;
use crate::systems::rigid_body_system::BodyPhysics;

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Unique ID for this body
    pub id: u32,
    pub shape: RigidShape,
    pub material: RigidMaterial,

    // === Physics State ===
    /// World position of the shape's origin cell
    pub pos: Vec2,
    /// Velocity (cells per second)
    pub velocity: Vec2,
    /// Rotation (degrees)
    pub rotation: f32,
    /// Angular velocity (degrees per second)
    pub angular_velocity: f32,
    /// Force accumulated since the last step
    pub force: Vec2,
    /// cells × density / 100
    pub mass: f32,

    pub gravity_enabled: bool,
    pub selected: bool,
}

impl RigidBody {
    pub fn new(id: u32, shape: RigidShape, material: RigidMaterial, x: f32, y: f32) -> Self {
        let mass = shape.cells().len() as f32 * material.props().density / 100.0;
        Self {
            id,
            shape,
            material,
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            rotation: 0.0,
            angular_velocity: 0.0,
            force: Vec2::zero(),
            mass,
            gravity_enabled: false,
            selected: false,
        }
    }

    #[inline]
    pub fn props(&self) -> BodyMaterialProps {
        self.material.props()
    }

    /// Transform a shape offset to grid coordinates
    #[inline]
    pub fn local_to_world(&self, dx: i32, dy: i32) -> (i32, i32) {
        let (dx, dy) = (dx as f32, dy as f32);
        let (rx, ry) = if self.rotation == 0.0 {
            (dx, dy)
        } else {
            let (sin, cos) = self.rotation.to_radians().sin_cos();
            (dx * cos - dy * sin, dx * sin + dy * cos)
        };
        ((self.pos.x + rx).round() as i32, (self.pos.y + ry).round() as i32)
    }

    /// Grid cells currently covered by the body
    pub fn world_cells(&self) -> Vec<(i32, i32)> {
        self.shape
            .cells()
            .iter()
            .map(|&(dx, dy)| self.local_to_world(dx, dy))
            .collect()
    }

    pub fn covers(&self, x: i32, y: i32) -> bool {
        self.shape
            .cells()
            .iter()
            .any(|&(dx, dy)| self.local_to_world(dx, dy) == (x, y))
    }

    /// Accumulate a force for the next step
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Semi-implicit Euler step
    pub fn integrate(&mut self, physics: &BodyPhysics) {
        let dt = physics.timestep;
        let accel = self.force * (1.0 / self.mass);
        self.velocity += accel * dt;
        if self.gravity_enabled {
            self.velocity.y += physics.gravity * dt;
        }
        self.pos += self.velocity * dt;
        self.velocity *= physics.damping;

        self.rotation += self.angular_velocity * dt;
        self.angular_velocity *= physics.damping;

        self.force = Vec2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> BodyPhysics {
        BodyPhysics::default()
    }

    #[test]
    fn mass_scales_with_cells_and_density() {
        let body = RigidBody::new(1, RigidShape::Beam, RigidMaterial::MetalBlock, 0.0, 0.0);
        assert_eq!(body.mass, 100.0);
        let body = RigidBody::new(1, RigidShape::Box, RigidMaterial::Rubber, 0.0, 0.0);
        assert_eq!(body.mass, 18.0);
    }

    #[test]
    fn unrotated_footprint_is_offset_by_position() {
        let body = RigidBody::new(1, RigidShape::Box, RigidMaterial::WoodBlock, 5.0, 5.0);
        let cells = body.world_cells();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&(4, 4)));
        assert!(cells.contains(&(6, 6)));
        assert!(body.covers(5, 6));
        assert!(!body.covers(7, 5));
    }

    #[test]
    fn quarter_turn_rotates_beam_upright() {
        let mut body = RigidBody::new(1, RigidShape::Beam, RigidMaterial::WoodBlock, 10.0, 10.0);
        body.rotation = 90.0;
        let cells = body.world_cells();
        // (2, 0) rotates onto (0, 2)
        assert!(cells.contains(&(10, 12)));
        assert!(cells.contains(&(10, 8)));
    }

    #[test]
    fn force_is_consumed_by_one_step() {
        let mut body = RigidBody::new(1, RigidShape::Box, RigidMaterial::WoodBlock, 0.0, 0.0);
        body.apply_force(Vec2::new(36.0, 0.0));
        body.integrate(&physics());
        // a = 36 / 36, v = a * dt, then damped
        let expected = (1.0 / 60.0) * 0.98;
        assert!((body.velocity.x - expected).abs() < 1e-6);
        assert_eq!(body.force, Vec2::zero());

        let before = body.velocity.x;
        body.integrate(&physics());
        assert!(body.velocity.x < before);
    }

    #[test]
    fn gravity_only_when_enabled() {
        let mut body = RigidBody::new(1, RigidShape::Ball, RigidMaterial::Crystal, 0.0, 0.0);
        body.integrate(&physics());
        assert_eq!(body.velocity.y, 0.0);
        body.gravity_enabled = true;
        body.integrate(&physics());
        assert!(body.velocity.y > 0.0);
        assert!(body.pos.y > 0.0);
    }
}
