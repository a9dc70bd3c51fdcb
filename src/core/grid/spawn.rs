use crate::core::random::RandomSource;
use crate::domain::content::MaterialRegistry;
use crate::domain::counters::MaterialCounters;
use crate::domain::materials::{MaterialId, PULSE_LIFE};

use super::{Cell, Grid};

/// Life a freshly written `material` starts with.
///
/// Materials with a lifetime draw from their span; the electricity carrier gets its
/// pulse; everything else starts at 0.
pub(crate) fn initial_life(
    content: &MaterialRegistry,
    material: MaterialId,
    rng: &mut dyn RandomSource,
) -> i32 {
    match content.get(material).and_then(|m| m.lifetime.as_ref()) {
        Some(lifetime) => lifetime.span.draw(rng),
        None if content.roles().electricity == Some(material) => PULSE_LIFE,
        None => 0,
    }
}

impl Grid {
    /// Place `material` at (x, y) on behalf of a caller (brush, API).
    ///
    /// Out of bounds is a no-op. Placing the material a cell already holds leaves it
    /// untouched. Otherwise the occupant is replaced, its life initialized and the
    /// placement counted. Electricity placed over a conductor remembers the conductor.
    ///
    /// Returns true when the placement was counted.
    pub fn create(
        &mut self,
        x: i32,
        y: i32,
        material: MaterialId,
        content: &MaterialRegistry,
        counters: &mut MaterialCounters,
        rng: &mut dyn RandomSource,
    ) -> bool {
        if content.get(material).is_none() {
            return false;
        }
        let Some(old) = self.get(x, y).copied() else {
            return false;
        };
        if old.material == Some(material) {
            return false;
        }

        let conduction = if content.roles().electricity == Some(material) {
            old.material.filter(|m| content.is_conductive(*m))
        } else {
            None
        };

        let life = initial_life(content, material, rng);
        if let Some(cell) = self.get_mut(x, y) {
            *cell = Cell {
                material: Some(material),
                life,
                conduction,
            };
        }
        counters.record_placed(material);
        true
    }

    /// Re-draw the cell's life for `material`: its lifetime span, the electricity pulse,
    /// or 0 for everything else.
    pub fn initialize_life(
        &mut self,
        x: i32,
        y: i32,
        material: MaterialId,
        content: &MaterialRegistry,
        rng: &mut dyn RandomSource,
    ) {
        let life = initial_life(content, material, rng);
        self.set_life(x, y, life);
    }

    /// Rule-driven type change: the cell becomes `material` with fresh life and no
    /// conduction memory. Not counted as a placement.
    pub(crate) fn replace(
        &mut self,
        x: i32,
        y: i32,
        material: MaterialId,
        content: &MaterialRegistry,
        rng: &mut dyn RandomSource,
    ) {
        if !self.in_bounds(x, y) {
            return;
        }
        let life = initial_life(content, material, rng);
        if let Some(cell) = self.get_mut(x, y) {
            *cell = Cell {
                material: Some(material),
                life,
                conduction: None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Grid, MaterialRegistry, MaterialCounters, StdRng) {
        let content = MaterialRegistry::builtin();
        let counters = MaterialCounters::new(content.len());
        (Grid::new(8, 8), content, counters, StdRng::seed_from_u64(11))
    }

    #[test]
    fn create_counts_only_changes() {
        let (mut grid, content, mut counters, mut rng) = setup();
        let sand = content.id_by_key("sand").unwrap();

        assert!(grid.create(2, 2, sand, &content, &mut counters, &mut rng));
        assert!(!grid.create(2, 2, sand, &content, &mut counters, &mut rng));
        assert_eq!(counters.placed(sand), 1);

        assert!(!grid.create(-1, 2, sand, &content, &mut counters, &mut rng));
        assert_eq!(counters.placed(sand), 1);
    }

    #[test]
    fn create_draws_life_from_span() {
        let (mut grid, content, mut counters, mut rng) = setup();
        let fire = content.id_by_key("fire").unwrap();
        for x in 0..8 {
            grid.create(x, 0, fire, &content, &mut counters, &mut rng);
            let life = grid.life_at(x, 0);
            assert!((50..=60).contains(&life), "fire life {life}");
        }
    }

    #[test]
    fn initialize_life_draws_span_pulse_or_zero() {
        let (mut grid, content, mut counters, mut rng) = setup();
        let smoke = content.id_by_key("smoke").unwrap();
        let electricity = content.id_by_key("electricity").unwrap();
        let sand = content.id_by_key("sand").unwrap();

        grid.create(0, 0, smoke, &content, &mut counters, &mut rng);
        grid.set_life(0, 0, 1);
        grid.initialize_life(0, 0, smoke, &content, &mut rng);
        assert!((30..=40).contains(&grid.life_at(0, 0)));

        grid.create(1, 0, electricity, &content, &mut counters, &mut rng);
        grid.set_life(1, 0, 0);
        grid.initialize_life(1, 0, electricity, &content, &mut rng);
        assert_eq!(grid.life_at(1, 0), PULSE_LIFE);

        grid.create(2, 0, sand, &content, &mut counters, &mut rng);
        grid.set_life(2, 0, 7);
        grid.initialize_life(2, 0, sand, &content, &mut rng);
        assert_eq!(grid.life_at(2, 0), 0);

        grid.initialize_life(3, 0, smoke, &content, &mut rng);
        assert!(grid.cell(3, 0).is_empty());
        assert_eq!(grid.life_at(3, 0), 0);
    }

    #[test]
    fn initialize_life_uses_fixed_span() {
        let json = r#"{"materials":[
            {"key":"fire","movement":"rising","color":[255,0,0]},
            {"key":"ember","movement":"rising","color":[1,2,3],
             "lifetime":{"span":5,"onExpire":"die"}}
        ]}"#;
        let content = MaterialRegistry::from_bundle_json(json).unwrap();
        let mut counters = MaterialCounters::new(content.len());
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(2, 1);
        let ember = content.id_by_key("ember").unwrap();

        grid.create(0, 0, ember, &content, &mut counters, &mut rng);
        grid.set_life(0, 0, 1);
        grid.initialize_life(0, 0, ember, &content, &mut rng);
        assert_eq!(grid.life_at(0, 0), 5);
    }

    #[test]
    fn electricity_over_conductor_remembers_it() {
        let (mut grid, content, mut counters, mut rng) = setup();
        let metal = content.id_by_key("metal").unwrap();
        let sand = content.id_by_key("sand").unwrap();
        let electricity = content.id_by_key("electricity").unwrap();

        grid.create(1, 1, metal, &content, &mut counters, &mut rng);
        grid.create(1, 1, electricity, &content, &mut counters, &mut rng);
        let cell = grid.cell(1, 1);
        assert_eq!(cell.material, Some(electricity));
        assert_eq!(cell.conduction, Some(metal));
        assert_eq!(cell.life, PULSE_LIFE);

        grid.create(2, 2, sand, &content, &mut counters, &mut rng);
        grid.create(2, 2, electricity, &content, &mut counters, &mut rng);
        assert_eq!(grid.cell(2, 2).conduction, None);
    }

    #[test]
    fn replace_clears_conduction_and_skips_counters() {
        let (mut grid, content, mut counters, mut rng) = setup();
        let metal = content.id_by_key("metal").unwrap();
        let electricity = content.id_by_key("electricity").unwrap();
        let steam = content.id_by_key("steam").unwrap();

        grid.create(0, 0, metal, &content, &mut counters, &mut rng);
        grid.create(0, 0, electricity, &content, &mut counters, &mut rng);
        grid.replace(0, 0, steam, &content, &mut rng);

        let cell = grid.cell(0, 0);
        assert_eq!(cell.material, Some(steam));
        assert_eq!(cell.conduction, None);
        assert!((40..=50).contains(&cell.life));
        assert_eq!(counters.placed(steam), 0);
    }
}
