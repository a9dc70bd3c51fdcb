use crate::core::grid::Grid;
use crate::systems::rigid_body::RigidBody;

/// Velocity sign as a grid step; zero counts as positive
#[inline]
fn step_sign(v: f32) -> i32 {
    if v < 0.0 {
        -1
    } else {
        1
    }
}

/// Shove the particle at (x, y) out of the body's way.
///
/// Candidates are biased by the body's velocity: ahead on x, ahead on y, the diagonal,
/// then behind on each axis. The whole cell moves into the first empty candidate; if there
/// is none the particle stays.
pub(super) fn displace_particle(body: &RigidBody, grid: &mut Grid, x: i32, y: i32) -> bool {
    let dx = step_sign(body.velocity.x);
    let dy = step_sign(body.velocity.y);
    for (ox, oy) in [(dx, 0), (0, dy), (dx, dy), (-dx, 0), (0, -dy)] {
        if grid.move_into_empty(x, y, x + ox, y + oy) {
            return true;
        }
    }
    false
}

/// Keep the body's footprint inside a `width` x `height` grid.
///
/// The worst overshoot on each axis is corrected once and that axis' velocity is
/// reversed and halved.
pub(super) fn constrain_to_bounds(body: &mut RigidBody, width: u32, height: u32) {
    let cells = body.world_cells();
    let (Some(min_x), Some(max_x)) = (
        cells.iter().map(|c| c.0).min(),
        cells.iter().map(|c| c.0).max(),
    ) else {
        return;
    };
    let (Some(min_y), Some(max_y)) = (
        cells.iter().map(|c| c.1).min(),
        cells.iter().map(|c| c.1).max(),
    ) else {
        return;
    };
    let (w, h) = (width as i32, height as i32);

    if min_x < 0 {
        body.pos.x -= min_x as f32;
        body.velocity.x *= -0.5;
    } else if max_x >= w {
        body.pos.x -= (max_x - w + 1) as f32;
        body.velocity.x *= -0.5;
    }

    if min_y < 0 {
        body.pos.y -= min_y as f32;
        body.velocity.y *= -0.5;
    } else if max_y >= h {
        body.pos.y -= (max_y - h + 1) as f32;
        body.velocity.y *= -0.5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Cell;
    use crate::domain::materials::MaterialId;
    use crate::domain::shapes::{RigidMaterial, RigidShape};

    fn grain(life: i32) -> Cell {
        Cell {
            material: Some(MaterialId(0)),
            life,
            conduction: None,
        }
    }

    #[test]
    fn displacement_prefers_direction_of_travel() {
        let mut grid = Grid::new(5, 5);
        grid.set_cell(2, 2, grain(7));
        let mut body = RigidBody::new(1, RigidShape::Box, RigidMaterial::WoodBlock, 2.0, 2.0);
        body.velocity.x = -3.0;
        assert!(displace_particle(&body, &mut grid, 2, 2));
        assert_eq!(grid.cell(1, 2), grain(7));
        assert!(grid.is_empty(2, 2));
    }

    #[test]
    fn displacement_falls_back_to_later_candidates() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(1, 1, grain(1));
        // Block (2,1), (1,2) and (2,2); (0,1) is the first open candidate.
        grid.set_cell(2, 1, grain(0));
        grid.set_cell(1, 2, grain(0));
        grid.set_cell(2, 2, grain(0));
        let body = RigidBody::new(1, RigidShape::Box, RigidMaterial::WoodBlock, 1.0, 1.0);
        assert!(displace_particle(&body, &mut grid, 1, 1));
        assert_eq!(grid.cell(0, 1), grain(1));
    }

    #[test]
    fn trapped_particle_stays() {
        let mut grid = Grid::new(1, 1);
        grid.set_cell(0, 0, grain(3));
        let body = RigidBody::new(1, RigidShape::Box, RigidMaterial::WoodBlock, 0.0, 0.0);
        assert!(!displace_particle(&body, &mut grid, 0, 0));
        assert_eq!(grid.cell(0, 0), grain(3));
    }

    #[test]
    fn overshoot_is_corrected_once_with_bounce() {
        let mut body = RigidBody::new(1, RigidShape::Box, RigidMaterial::WoodBlock, -3.0, 9.0);
        body.velocity.x = -4.0;
        body.velocity.y = 2.0;
        constrain_to_bounds(&mut body, 10, 10);
        // left edge at x = -4 shifts by 4; bottom edge at y = 10 shifts by 1
        assert_eq!(body.pos.x, 1.0);
        assert_eq!(body.pos.y, 8.0);
        assert_eq!(body.velocity.x, 2.0);
        assert_eq!(body.velocity.y, -1.0);
        assert!(body.world_cells().iter().all(|&(x, y)| (0..10).contains(&x) && (0..10).contains(&y)));
    }

    #[test]
    fn inside_body_is_untouched() {
        let mut body = RigidBody::new(1, RigidShape::Box, RigidMaterial::WoodBlock, 5.0, 5.0);
        body.velocity.x = 1.5;
        constrain_to_bounds(&mut body, 10, 10);
        assert_eq!(body.pos.x, 5.0);
        assert_eq!(body.velocity.x, 1.5);
    }
}
