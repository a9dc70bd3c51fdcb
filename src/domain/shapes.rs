//! Rigid body shapes and materials.
//!
//! Both catalogs are fixed. Keys arriving from callers are parsed with `FromStr`, so an
//! unknown key fails when the body is constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigidShape {
    Box,
    Ball,
    Beam,
    Triangle,
}

const BOX_CELLS: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BALL_CELLS: [(i32, i32); 9] = [
    (0, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

const BEAM_CELLS: [(i32, i32); 10] = [
    (-2, 0),
    (-1, 0),
    (0, 0),
    (1, 0),
    (2, 0),
    (-2, 1),
    (-1, 1),
    (0, 1),
    (1, 1),
    (2, 1),
];

const TRIANGLE_CELLS: [(i32, i32); 9] = [
    (0, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (-2, 2),
    (-1, 2),
    (0, 2),
    (1, 2),
    (2, 2),
];

impl RigidShape {
    pub const ALL: [RigidShape; 4] = [
        RigidShape::Box,
        RigidShape::Ball,
        RigidShape::Beam,
        RigidShape::Triangle,
    ];

    /// Cell offsets relative to the body's center
    pub fn cells(self) -> &'static [(i32, i32)] {
        match self {
            RigidShape::Box => &BOX_CELLS,
            RigidShape::Ball => &BALL_CELLS,
            RigidShape::Beam => &BEAM_CELLS,
            RigidShape::Triangle => &TRIANGLE_CELLS,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            RigidShape::Box => "box",
            RigidShape::Ball => "ball",
            RigidShape::Beam => "beam",
            RigidShape::Triangle => "triangle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RigidShape::Box => "BOX",
            RigidShape::Ball => "BALL",
            RigidShape::Beam => "BEAM",
            RigidShape::Triangle => "TRI",
        }
    }
}

impl FromStr for RigidShape {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RigidShape::ALL
            .into_iter()
            .find(|shape| shape.key() == s)
            .ok_or_else(|| EngineError::UnknownShape(s.to_string()))
    }
}

impl fmt::Display for RigidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Physical properties of a body material
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMaterialProps {
    pub name: &'static str,
    pub label: &'static str,
    pub density: f32,
    pub friction: f32,
    pub color: [u8; 3],
    /// Whether the body shoves particles out of its footprint
    pub pushes_particles: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigidMaterial {
    WoodBlock,
    MetalBlock,
    Rubber,
    Crystal,
}

impl RigidMaterial {
    pub const ALL: [RigidMaterial; 4] = [
        RigidMaterial::WoodBlock,
        RigidMaterial::MetalBlock,
        RigidMaterial::Rubber,
        RigidMaterial::Crystal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RigidMaterial::WoodBlock => "wood_block",
            RigidMaterial::MetalBlock => "metal_block",
            RigidMaterial::Rubber => "rubber",
            RigidMaterial::Crystal => "crystal",
        }
    }

    pub fn props(self) -> BodyMaterialProps {
        match self {
            RigidMaterial::WoodBlock => BodyMaterialProps {
                name: "Wooden Block",
                label: "WOOD",
                density: 400.0,
                friction: 0.5,
                color: [139, 69, 19],
                pushes_particles: true,
            },
            RigidMaterial::MetalBlock => BodyMaterialProps {
                name: "Metal Block",
                label: "METL",
                density: 1000.0,
                friction: 0.2,
                color: [192, 192, 192],
                pushes_particles: true,
            },
            RigidMaterial::Rubber => BodyMaterialProps {
                name: "Rubber",
                label: "RUBR",
                density: 200.0,
                friction: 0.7,
                color: [60, 60, 60],
                pushes_particles: false,
            },
            RigidMaterial::Crystal => BodyMaterialProps {
                name: "Crystal",
                label: "CRYS",
                density: 800.0,
                friction: 0.1,
                color: [200, 200, 255],
                pushes_particles: true,
            },
        }
    }
}

impl FromStr for RigidMaterial {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RigidMaterial::ALL
            .into_iter()
            .find(|material| material.key() == s)
            .ok_or_else(|| EngineError::UnknownBodyMaterial(s.to_string()))
    }
}

impl fmt::Display for RigidMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
