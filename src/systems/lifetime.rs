//! Lifetime decay pass.
//!
//! Runs over the whole grid before any cell is visited for interactions or movement.

use crate::core::grid::{initial_life, Cell, Grid};
use crate::core::random::RandomSource;
use crate::domain::content::MaterialRegistry;
use crate::domain::counters::MaterialCounters;
use crate::domain::materials::Expiry;

/// Age every cell by one tick.
///
/// Materials with a lifetime lose one life; at zero they die or become their expiry
/// material (which draws a fresh life) and the expiry is counted. Conductors count their
/// cooldown down to zero.
pub fn decay(
    grid: &mut Grid,
    content: &MaterialRegistry,
    counters: &mut MaterialCounters,
    rng: &mut dyn RandomSource,
) {
    for cell in grid.cells_mut() {
        let Some(material) = cell.material else {
            continue;
        };
        let Some(props) = content.get(material) else {
            continue;
        };

        match props.lifetime.as_ref() {
            Some(lifetime) => {
                cell.life -= 1;
                if cell.life > 0 {
                    continue;
                }
                counters.record_expired(material);
                *cell = match lifetime.on_expire {
                    Expiry::Die => Cell::EMPTY,
                    Expiry::Become(next) => Cell {
                        material: Some(next),
                        life: initial_life(content, next, rng),
                        conduction: None,
                    },
                };
            }
            None if props.conductive && cell.life > 0 => cell.life -= 1,
            None => {}
        }
    }
}
