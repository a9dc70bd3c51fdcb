//! Body save/restore as JSON

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::domain::shapes::{RigidMaterial, RigidShape};
use crate::systems::rigid_body::{RigidBody, Vec2};

use super::system::RigidBodySystem;

/// Persisted body state. Keys stay strings so a bad entry can be skipped on restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub shape_type: String,
    pub material: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub velocity: [f32; 2],
    #[serde(default)]
    pub angular_velocity: f32,
    #[serde(default)]
    pub gravity_enabled: bool,
}

impl From<&RigidBody> for BodySnapshot {
    fn from(body: &RigidBody) -> Self {
        Self {
            shape_type: body.shape.key().to_string(),
            material: body.material.key().to_string(),
            x: body.pos.x,
            y: body.pos.y,
            rotation: body.rotation,
            velocity: [body.velocity.x, body.velocity.y],
            angular_velocity: body.angular_velocity,
            gravity_enabled: body.gravity_enabled,
        }
    }
}

impl RigidBodySystem {
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.iter().map(BodySnapshot::from).collect()
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace every body with the snapshot's.
    ///
    /// Entries with unknown shape or material keys are skipped. Returns how many bodies
    /// were restored.
    pub fn restore(&mut self, snapshot: &[BodySnapshot]) -> usize {
        self.clear();
        let mut restored = 0;
        for entry in snapshot {
            let shape = match entry.shape_type.parse::<RigidShape>() {
                Ok(shape) => shape,
                Err(err) => {
                    tracing::warn!(%err, "skipping body snapshot entry");
                    continue;
                }
            };
            let material = match entry.material.parse::<RigidMaterial>() {
                Ok(material) => material,
                Err(err) => {
                    tracing::warn!(%err, "skipping body snapshot entry");
                    continue;
                }
            };

            let id = self.add(shape, material, entry.x, entry.y);
            if let Some(body) = self.bodies_mut().iter_mut().find(|b| b.id == id) {
                body.rotation = entry.rotation;
                body.velocity = Vec2::new(entry.velocity[0], entry.velocity[1]);
                body.angular_velocity = entry.angular_velocity;
                body.gravity_enabled = entry.gravity_enabled;
            }
            restored += 1;
        }
        restored
    }

    /// Parse and restore a JSON snapshot. Malformed JSON is an error and leaves the
    /// bodies untouched.
    pub fn restore_json(&mut self, json: &str) -> Result<usize> {
        let snapshot: Vec<BodySnapshot> = serde_json::from_str(json)?;
        Ok(self.restore(&snapshot))
    }
}
