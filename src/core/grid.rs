//! Grid - dense cell storage
//!
//! One array of `Cell` values instead of parallel type/life/conduction arrays:
//! a cell's material, remaining life and conduction memory always travel together.
//!
//! All coordinates are signed so neighbor scans can step off the edge; every accessor
//! treats out-of-bounds as "nothing there" and every mutator ignores it.

mod cell;
mod moves;
mod spawn;

pub use cell::Cell;
pub(crate) use spawn::initial_life;

use crate::domain::materials::MaterialId;

/// The eight neighbor offsets, in scan order
pub const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; size],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Cell at (x, y), or `None` outside the grid
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Copy of the cell at (x, y); out-of-bounds reads as empty
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.get(x, y).copied().unwrap_or(Cell::EMPTY)
    }

    #[inline]
    pub fn material_at(&self, x: i32, y: i32) -> Option<MaterialId> {
        self.get(x, y).and_then(|c| c.material)
    }

    #[inline]
    pub fn life_at(&self, x: i32, y: i32) -> i32 {
        self.get(x, y).map_or(0, |c| c.life)
    }

    /// True only for in-bounds empty cells
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c.is_empty())
    }

    /// True when (x, y) is in bounds and holds `material`
    #[inline]
    pub fn holds(&self, x: i32, y: i32, material: MaterialId) -> bool {
        self.material_at(x, y) == Some(material)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Empty the cell (material, life and conduction memory together)
    pub fn clear_cell(&mut self, x: i32, y: i32) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = Cell::EMPTY;
        }
    }

    /// Overwrite the whole cell
    #[inline]
    pub(crate) fn set_cell(&mut self, x: i32, y: i32, value: Cell) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = value;
        }
    }

    /// Overwrite the cell's remaining life; ignored for empty cells
    pub(crate) fn set_life(&mut self, x: i32, y: i32, life: i32) {
        if let Some(cell) = self.get_mut(x, y) {
            if !cell.is_empty() {
                cell.life = life;
            }
        }
    }

    /// Reset every cell to empty
    pub fn reset(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Coordinates of every occupied cell, row-major
    pub fn occupied_positions(&self) -> Vec<(i32, i32)> {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(|(i, _)| ((i % w) as i32, (i / w) as i32))
            .collect()
    }

    /// In-grid cells within Euclidean `radius` of (cx, cy), column by column.
    ///
    /// The scan is clipped to the grid and the distance test runs in `i64`, so any radius
    /// is safe. A negative radius covers nothing.
    pub fn disc(&self, cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
        if radius < 0 {
            return Vec::new();
        }
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let x_range = (cx - r).max(0)..=(cx + r).min(i64::from(self.width) - 1);
        let y_lo = (cy - r).max(0);
        let y_hi = (cy + r).min(i64::from(self.height) - 1);

        let mut cells = Vec::new();
        for x in x_range {
            for y in y_lo..=y_hi {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r * r {
                    cells.push((x as i32, y as i32));
                }
            }
        }
        cells
    }

    /// Number of occupied cells
    pub fn particle_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Raw cell slice (read-only) for renderers and snapshots
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
