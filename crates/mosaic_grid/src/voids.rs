//! Decomposition of SM-obstacle cells into rectangular void volumes.
//!
//! The scan is greedy and reproducible rather than optimal: cells are visited in row-major
//! order, and every unvisited void cell starts a rectangle that first grows to the right
//! and then grows downwards while whole rows stay void. The resulting regions cover every
//! void cell exactly once, but are not guaranteed to be the fewest possible.
use tracing::debug;

use crate::config::model::VoidRegion;
use crate::grid::Grid;

/// Inclusive bounding box of the single zone built from a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZoneBounds {
    pub max_x: usize,
    pub max_y: usize,
    pub max_z: usize,
}

/// Bounding box spanning every cell of `grid` and the full facility height.
pub fn zone_bounds(grid: &Grid, z_size: usize) -> ZoneBounds {
    ZoneBounds {
        max_x: grid.width().saturating_sub(1),
        max_y: grid.height().saturating_sub(1),
        max_z: z_size,
    }
}

/// Partition all void cells of `grid` into rectangles extruded from `z = 0` to `z_size`.
pub fn extract_void_regions(grid: &Grid, z_size: usize) -> Vec<VoidRegion> {
    let (width, height) = (grid.width(), grid.height());
    let mut visited = vec![false; width * height];
    let mut regions = Vec::new();

    let is_free_void = |visited: &[bool], x: usize, y: usize| -> bool {
        !visited[y * width + x] && grid.is_void(x, y)
    };

    for start_y in 0..height {
        for start_x in 0..width {
            if !is_free_void(&visited, start_x, start_y) {
                continue;
            }

            let mut end_x = start_x;
            while end_x + 1 < width && is_free_void(&visited, end_x + 1, start_y) {
                end_x += 1;
            }

            let mut end_y = start_y;
            while end_y + 1 < height
                && (start_x..=end_x).all(|x| is_free_void(&visited, x, end_y + 1))
            {
                end_y += 1;
            }

            for y in start_y..=end_y {
                visited[y * width + start_x..=y * width + end_x].fill(true);
            }

            regions.push(VoidRegion {
                from_x: start_x,
                to_x: end_x,
                from_y: start_y,
                to_y: end_y,
                from_z: 0,
                to_z: z_size,
            });
        }
    }

    debug!(
        "Extracted {} void region(s) from {}x{} grid.",
        regions.len(),
        width,
        height
    );
    regions
}
