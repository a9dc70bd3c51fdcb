//! Material registry loaded from a JSON bundle.
//!
//! Bundle materials reference each other by key; every reference is resolved to a
//! `MaterialId` here so the simulation never touches strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::domain::materials::{
    Combustion, Corrosion, Expiry, LifeSpan, Lifetime, Material, MaterialId, MovementClass,
    Transmutation, DEFAULT_BURN, DEFAULT_DENSITY, SOLID_DENSITY,
};

/// Bundle compiled into the engine
pub const BUILTIN_BUNDLE: &str = include_str!("../../content/materials.json");

/// Materials the rules refer to by role rather than by data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    pub fire: MaterialId,
    pub water: Option<MaterialId>,
    pub lava: Option<MaterialId>,
    pub steam: Option<MaterialId>,
    pub obsidian: Option<MaterialId>,
    pub salt: Option<MaterialId>,
    pub ice: Option<MaterialId>,
    pub plant: Option<MaterialId>,
    pub electricity: Option<MaterialId>,
}

#[derive(Clone, Debug)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
    key_to_id: HashMap<String, MaterialId>,
    roles: Roles,
}

impl MaterialRegistry {
    pub fn from_bundle_json(json: &str) -> Result<Self> {
        let bundle: BundleRoot = serde_json::from_str(json)?;
        Self::from_bundle(bundle)
    }

    /// Registry built from the embedded bundle
    pub fn builtin() -> Self {
        Self::from_bundle_json(BUILTIN_BUNDLE).expect("embedded material bundle is valid")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = MaterialId> + '_ {
        self.materials.iter().map(|m| m.id)
    }

    pub fn id_by_key(&self, key: &str) -> Option<MaterialId> {
        self.key_to_id.get(key).copied()
    }

    #[inline]
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Density used for displacement; unknown ids are treated as immovable
    #[inline]
    pub fn density(&self, id: MaterialId) -> f32 {
        self.get(id).map_or(SOLID_DENSITY, |m| m.density)
    }

    #[inline]
    pub fn movement(&self, id: MaterialId) -> MovementClass {
        self.get(id).map_or(MovementClass::Solid, |m| m.movement)
    }

    #[inline]
    pub fn is_conductive(&self, id: MaterialId) -> bool {
        self.get(id).is_some_and(|m| m.conductive)
    }

    #[inline]
    pub fn is_flammable(&self, id: MaterialId) -> bool {
        self.get(id).is_some_and(Material::is_flammable)
    }

    #[inline]
    pub fn is_explosion_immune(&self, id: MaterialId) -> bool {
        self.get(id).is_some_and(|m| m.explosion_immune)
    }

    /// Fraction of the full life left, for renderers to fade by. 1.0 for materials
    /// without a lifetime and for lifetimes that do not fade.
    pub fn life_fraction(&self, id: MaterialId, life: i32) -> f32 {
        match self.get(id).and_then(|m| m.lifetime.as_ref()) {
            Some(lifetime) if lifetime.fades && lifetime.full > 0 => {
                (life as f32 / lifetime.full as f32).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    pub fn manifest_json(&self) -> String {
        let out = ContentManifest {
            format_version: 1,
            materials: self
                .materials
                .iter()
                .map(|m| ContentManifestMaterial {
                    id: m.id.0,
                    key: &m.key,
                    name: &m.name,
                    label: &m.label,
                    description: &m.description,
                    color: m.color_abgr(),
                    fades: m.lifetime.as_ref().is_some_and(|l| l.fades),
                })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self> {
        if bundle.materials.is_empty() {
            return Err(EngineError::EmptyBundle);
        }
        if bundle.materials.len() > u8::MAX as usize {
            return Err(EngineError::TooManyMaterials(bundle.materials.len()));
        }

        let mut key_to_id = HashMap::with_capacity(bundle.materials.len());
        for (idx, el) in bundle.materials.iter().enumerate() {
            if key_to_id
                .insert(el.key.clone(), MaterialId(idx as u8))
                .is_some()
            {
                return Err(EngineError::DuplicateMaterial(el.key.clone()));
            }
        }

        let resolve = |material: &str, reference: &str| -> Result<MaterialId> {
            key_to_id
                .get(reference)
                .copied()
                .ok_or_else(|| EngineError::DanglingReference {
                    material: material.to_string(),
                    reference: reference.to_string(),
                })
        };
        let resolve_opt = |material: &str, reference: Option<&str>| -> Result<Option<MaterialId>> {
            reference.map(|r| resolve(material, r)).transpose()
        };

        let mut materials = Vec::with_capacity(bundle.materials.len());
        for (idx, el) in bundle.materials.into_iter().enumerate() {
            let key = el.key.as_str();

            let lifetime = match el.lifetime {
                None => None,
                Some(lt) => {
                    let span = match lt.span {
                        BundleSpan::Fixed(ticks) => LifeSpan::Fixed(ticks),
                        BundleSpan::Range([min, max]) => LifeSpan::Range { min, max },
                    };
                    let (min, max) = match span {
                        LifeSpan::Fixed(t) => (t, t),
                        LifeSpan::Range { min, max } => (min, max),
                    };
                    if min < 1 || min > max {
                        return Err(EngineError::InvalidLifetime(el.key.clone()));
                    }
                    let on_expire = match lt.on_expire {
                        BundleExpiry::Die => Expiry::Die,
                        BundleExpiry::Become(target) => Expiry::Become(resolve(key, &target)?),
                    };
                    Some(Lifetime {
                        span,
                        full: lt.full.unwrap_or(min),
                        on_expire,
                        fades: lt.fades,
                    })
                }
            };

            let combustion = if el.flammable {
                Some(Combustion {
                    susceptibility: el.burn_multiplier.unwrap_or(DEFAULT_BURN),
                    burns_into: resolve_opt(key, el.burns_into.as_deref())?,
                })
            } else {
                None
            };

            let corrosion = match el.corrode {
                None => None,
                Some(c) => Some(Corrosion {
                    exclude: c
                        .exclude
                        .iter()
                        .map(|r| resolve(key, r))
                        .collect::<Result<Vec<_>>>()?,
                }),
            };

            let transmute = match el.transmute {
                None => None,
                Some(t) => Some(Transmutation {
                    triggers: t
                        .on
                        .iter()
                        .map(|r| resolve(key, r))
                        .collect::<Result<Vec<_>>>()?,
                    into: resolve(key, &t.into)?,
                }),
            };

            // Solids are pinned so that no movement rule can displace them.
            let density = match el.movement {
                MovementClass::Solid => SOLID_DENSITY,
                _ => el.density.unwrap_or(DEFAULT_DENSITY),
            };

            materials.push(Material {
                id: MaterialId(idx as u8),
                name: el.name.unwrap_or_else(|| el.key.clone()),
                label: el.label.unwrap_or_else(|| el.key.to_uppercase()),
                description: el.description,
                movement: el.movement,
                density,
                ignition: el.flaming.then(|| el.burn.unwrap_or(DEFAULT_BURN)),
                combustion,
                override_my_burn: resolve_opt(key, el.override_my_burn.as_deref())?,
                lifetime,
                corrosion,
                clone_into: resolve_opt(key, el.clone.as_deref())?,
                shatter_into: resolve_opt(key, el.shatter.as_deref())?,
                explode_radius: el.explode_radius,
                transmute,
                conductive: el.conductive,
                explosion_immune: el.explosion_immune,
                color: el.color,
                key: el.key,
            });
        }

        let roles = Roles {
            fire: key_to_id
                .get("fire")
                .copied()
                .ok_or(EngineError::MissingMaterial("fire"))?,
            water: key_to_id.get("water").copied(),
            lava: key_to_id.get("lava").copied(),
            steam: key_to_id.get("steam").copied(),
            obsidian: key_to_id.get("obsidian").copied(),
            salt: key_to_id.get("salt").copied(),
            ice: key_to_id.get("ice").copied(),
            plant: key_to_id.get("plant").copied(),
            electricity: key_to_id.get("electricity").copied(),
        };

        tracing::debug!(count = materials.len(), "material registry loaded");

        Ok(Self {
            materials,
            key_to_id,
            roles,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentManifest<'a> {
    format_version: u32,
    materials: Vec<ContentManifestMaterial<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentManifestMaterial<'a> {
    id: u8,
    key: &'a str,
    name: &'a str,
    label: &'a str,
    description: &'a str,
    color: u32,
    fades: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    #[allow(dead_code)]
    #[serde(default)]
    format_version: u32,
    materials: Vec<BundleMaterial>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleMaterial {
    key: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    description: String,
    movement: MovementClass,
    color: [u8; 3],
    #[serde(default)]
    density: Option<f32>,
    #[serde(default)]
    flammable: bool,
    #[serde(default)]
    burn_multiplier: Option<f32>,
    #[serde(default)]
    burns_into: Option<String>,
    #[serde(default)]
    flaming: bool,
    #[serde(default)]
    burn: Option<f32>,
    #[serde(default)]
    override_my_burn: Option<String>,
    #[serde(default)]
    lifetime: Option<BundleLifetime>,
    #[serde(default)]
    corrode: Option<BundleCorrode>,
    #[serde(default)]
    clone: Option<String>,
    #[serde(default)]
    shatter: Option<String>,
    #[serde(default)]
    explode_radius: Option<i32>,
    #[serde(default)]
    transmute: Option<BundleTransmute>,
    #[serde(default)]
    conductive: bool,
    #[serde(default)]
    explosion_immune: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleLifetime {
    span: BundleSpan,
    #[serde(default)]
    full: Option<i32>,
    on_expire: BundleExpiry,
    #[serde(default = "default_fades")]
    fades: bool,
}

fn default_fades() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BundleSpan {
    Fixed(i32),
    Range([i32; 2]),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum BundleExpiry {
    Die,
    Become(String),
}

#[derive(Deserialize)]
struct BundleCorrode {
    #[serde(default)]
    exclude: Vec<String>,
}

#[derive(Deserialize)]
struct BundleTransmute {
    on: Vec<String>,
    into: String,
}
