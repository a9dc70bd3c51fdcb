//! Achievement tracker.
//!
//! Definitions are JSON. Conditions are checked against the engine's read-only counters
//! once per external tick; unlocks raise a notification that stays up for a few seconds.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::domain::content::MaterialRegistry;
use crate::domain::counters::MaterialCounters;
use crate::domain::materials::MaterialId;

/// Achievements compiled into the engine
pub const BUILTIN_ACHIEVEMENTS: &str = include_str!("../../content/achievements.json");

/// How long an unlock notification stays up
pub const NOTIFICATION_SECONDS: f32 = 3.0;

/// Material wildcard in condition definitions
const ANY_MATERIAL: &str = "*";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    #[default]
    Achievement,
    Challenge,
    Secret,
}

/// Which counter a condition reads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Placed,
    Expired,
    Exploded,
    Corroded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Counter for `material` (or all materials) reached `amount`
    Count {
        metric: Metric,
        material: Option<MaterialId>,
        amount: u64,
    },
    /// Every material placed at least once
    PlacedEveryMaterial,
}

impl Condition {
    pub fn is_met(&self, counters: &MaterialCounters, material_count: usize) -> bool {
        match *self {
            Condition::PlacedEveryMaterial => counters.placed_every_material(),
            Condition::Count {
                metric,
                material: Some(material),
                amount,
            } => read(counters, metric, material) >= amount,
            Condition::Count {
                metric,
                material: None,
                amount,
            } => {
                let total: u64 = (0..material_count.min(u8::MAX as usize))
                    .map(|i| read(counters, metric, MaterialId(i as u8)))
                    .sum();
                total >= amount
            }
        }
    }
}

fn read(counters: &MaterialCounters, metric: Metric, material: MaterialId) -> u64 {
    match metric {
        Metric::Placed => counters.placed(material),
        Metric::Expired => counters.expired(material),
        Metric::Exploded => counters.exploded(material),
        Metric::Corroded => counters.corroded(material),
    }
}

#[derive(Clone, Debug)]
pub struct Achievement {
    pub key: String,
    pub name: String,
    pub description: String,
    pub kind: AchievementKind,
    pub condition: Condition,
    pub unlocked: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub key: String,
    pub name: String,
    /// Seconds left on screen
    pub remaining: f32,
}

#[derive(Clone, Debug, Default)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
    notifications: Vec<Notification>,
    material_count: usize,
}

impl AchievementTracker {
    /// Parse definitions and resolve their material keys against `content`.
    ///
    /// A definition naming a material the registry lacks is skipped with a warning.
    pub fn from_json(json: &str, content: &MaterialRegistry) -> Result<Self> {
        let bundle: AchievementBundle = serde_json::from_str(json)?;
        let mut achievements = Vec::with_capacity(bundle.achievements.len());
        for def in bundle.achievements {
            let Some(condition) = def.condition.resolve(content) else {
                tracing::warn!(key = %def.key, "achievement references an unknown material");
                continue;
            };
            achievements.push(Achievement {
                key: def.key,
                name: def.name,
                description: def.description,
                kind: def.kind,
                condition,
                unlocked: false,
            });
        }
        Ok(Self {
            achievements,
            notifications: Vec::new(),
            material_count: content.len(),
        })
    }

    pub fn builtin(content: &MaterialRegistry) -> Self {
        Self::from_json(BUILTIN_ACHIEVEMENTS, content)
            .expect("embedded achievement definitions are valid")
    }

    /// Unlock everything whose condition now holds. Returns the newly unlocked keys.
    pub fn check(&mut self, counters: &MaterialCounters) -> Vec<String> {
        let mut unlocked = Vec::new();
        for achievement in self.achievements.iter_mut().filter(|a| !a.unlocked) {
            if !achievement.condition.is_met(counters, self.material_count) {
                continue;
            }
            achievement.unlocked = true;
            tracing::info!(key = %achievement.key, "achievement unlocked");
            self.notifications.push(Notification {
                key: achievement.key.clone(),
                name: achievement.name.clone(),
                remaining: NOTIFICATION_SECONDS,
            });
            unlocked.push(achievement.key.clone());
        }
        unlocked
    }

    /// Advance notification timers by `dt` seconds and drop expired ones
    pub fn update(&mut self, dt: f32) {
        for n in self.notifications.iter_mut() {
            n.remaining -= dt;
        }
        self.notifications.retain(|n| n.remaining > 0.0);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notifications_json(&self) -> String {
        serde_json::to_string(&self.notifications).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter()
    }

    pub fn is_unlocked(&self, key: &str) -> bool {
        self.achievements.iter().any(|a| a.key == key && a.unlocked)
    }

    /// Lock everything again (new session)
    pub fn reset(&mut self) {
        for a in self.achievements.iter_mut() {
            a.unlocked = false;
        }
        self.notifications.clear();
    }
}

#[derive(Deserialize)]
struct AchievementBundle {
    achievements: Vec<AchievementDef>,
}

#[derive(Deserialize)]
struct AchievementDef {
    key: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    kind: AchievementKind,
    condition: ConditionDef,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum ConditionDef {
    Place(CountDef),
    PlaceOneOfAll,
    LifeRanOut(CountDef),
    Exploded(CountDef),
    Corroded(CountDef),
}

#[derive(Deserialize)]
struct CountDef {
    material: String,
    #[serde(default = "default_amount")]
    amount: u64,
}

fn default_amount() -> u64 {
    1
}

impl ConditionDef {
    fn resolve(self, content: &MaterialRegistry) -> Option<Condition> {
        let (metric, count) = match self {
            ConditionDef::PlaceOneOfAll => return Some(Condition::PlacedEveryMaterial),
            ConditionDef::Place(c) => (Metric::Placed, c),
            ConditionDef::LifeRanOut(c) => (Metric::Expired, c),
            ConditionDef::Exploded(c) => (Metric::Exploded, c),
            ConditionDef::Corroded(c) => (Metric::Corroded, c),
        };
        let material = if count.material == ANY_MATERIAL {
            None
        } else {
            Some(content.id_by_key(&count.material)?)
        };
        Some(Condition::Count {
            metric,
            material,
            amount: count.amount,
        })
    }
}
