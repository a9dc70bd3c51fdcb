//! Domain data: material definitions and their registry, per-material counters,
//! and the rigid body shape/material catalog.

pub mod content;
pub mod counters;
pub mod materials;
pub mod shapes;
