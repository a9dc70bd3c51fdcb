use super::Grid;

impl Grid {
    /// Exchange two cells whole (material, life, conduction memory).
    ///
    /// No-op if either coordinate is out of bounds. Swapping twice restores the grid.
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (Some(a), Some(b)) = (self.index(x1, y1), self.index(x2, y2)) else {
            return;
        };
        self.cells.swap(a, b);
    }

    /// Move the occupant of (x1, y1) into the empty cell (x2, y2).
    ///
    /// Returns false (and changes nothing) when the target is occupied or out of bounds.
    pub fn move_into_empty(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        if !self.is_empty(x2, y2) || self.get(x1, y1).is_none() {
            return false;
        }
        self.swap(x1, y1, x2, y2);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cell, Grid};
    use crate::domain::materials::MaterialId;

    fn put(grid: &mut Grid, x: i32, y: i32, cell: Cell) {
        if let Some(c) = grid.get_mut(x, y) {
            *c = cell;
        }
    }

    #[test]
    fn double_swap_restores_state() {
        let mut grid = Grid::new(5, 5);
        let a = Cell {
            material: Some(MaterialId(21)),
            life: 2,
            conduction: Some(MaterialId(20)),
        };
        let b = Cell {
            material: Some(MaterialId(2)),
            life: 55,
            conduction: None,
        };
        put(&mut grid, 1, 1, a);
        put(&mut grid, 3, 4, b);

        grid.swap(1, 1, 3, 4);
        assert_eq!(grid.cell(1, 1), b);
        assert_eq!(grid.cell(3, 4), a);

        grid.swap(3, 4, 1, 1);
        assert_eq!(grid.cell(1, 1), a);
        assert_eq!(grid.cell(3, 4), b);
    }

    #[test]
    fn swap_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(2, 2);
        let a = Cell {
            material: Some(MaterialId(1)),
            life: 1,
            conduction: None,
        };
        put(&mut grid, 0, 0, a);
        grid.swap(0, 0, -1, 0);
        assert_eq!(grid.cell(0, 0), a);
    }

    #[test]
    fn move_into_empty_refuses_occupied_target() {
        let mut grid = Grid::new(3, 1);
        let a = Cell {
            material: Some(MaterialId(1)),
            life: 0,
            conduction: None,
        };
        put(&mut grid, 0, 0, a);
        put(&mut grid, 1, 0, a);
        assert!(!grid.move_into_empty(0, 0, 1, 0));
        assert!(grid.move_into_empty(1, 0, 2, 0));
        assert!(grid.is_empty(1, 0));
        assert_eq!(grid.cell(2, 0), a);
    }
}
