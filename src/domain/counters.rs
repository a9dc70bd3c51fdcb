//! Per-material session counters read by the achievement tracker.
//!
//! Every counter only ever increases; `reset` happens when the material set changes.

use crate::domain::materials::MaterialId;

#[derive(Clone, Debug, Default)]
pub struct MaterialCounters {
    placed: Vec<u64>,
    exploded: Vec<u64>,
    expired: Vec<u64>,
    corroded: Vec<u64>,
}

impl MaterialCounters {
    pub fn new(material_count: usize) -> Self {
        Self {
            placed: vec![0; material_count],
            exploded: vec![0; material_count],
            expired: vec![0; material_count],
            corroded: vec![0; material_count],
        }
    }

    /// Zero every counter and resize for a new material set
    pub fn reset(&mut self, material_count: usize) {
        *self = Self::new(material_count);
    }

    #[inline]
    pub fn record_placed(&mut self, material: MaterialId) {
        bump(&mut self.placed, material);
    }

    /// A shatter event turned a `material` cell into its shatter target
    #[inline]
    pub fn record_exploded(&mut self, material: MaterialId) {
        bump(&mut self.exploded, material);
    }

    /// A `material` cell ran out of life
    #[inline]
    pub fn record_expired(&mut self, material: MaterialId) {
        bump(&mut self.expired, material);
    }

    /// A `material` cell dissolved a neighbor
    #[inline]
    pub fn record_corroded(&mut self, material: MaterialId) {
        bump(&mut self.corroded, material);
    }

    pub fn placed(&self, material: MaterialId) -> u64 {
        read(&self.placed, material)
    }

    pub fn exploded(&self, material: MaterialId) -> u64 {
        read(&self.exploded, material)
    }

    pub fn expired(&self, material: MaterialId) -> u64 {
        read(&self.expired, material)
    }

    pub fn corroded(&self, material: MaterialId) -> u64 {
        read(&self.corroded, material)
    }

    pub fn total_placed(&self) -> u64 {
        self.placed.iter().sum()
    }

    /// Whether every material has been placed at least once
    pub fn placed_every_material(&self) -> bool {
        !self.placed.is_empty() && self.placed.iter().all(|&n| n > 0)
    }
}

#[inline]
fn bump(counts: &mut [u64], material: MaterialId) {
    if let Some(n) = counts.get_mut(material.index()) {
        *n = n.saturating_add(1);
    }
}

#[inline]
fn read(counts: &[u64], material: MaterialId) -> u64 {
    counts.get(material.index()).copied().unwrap_or(0)
}
