//! Boundary-aware orthogonal neighbor counting

use crate::spatial::cell::CellCode;
use crate::spatial::grid::SpriteGrid;

/// Count live cells orthogonally adjacent to `(x, y)`.
///
/// Only the four cells directly above, below, left and right are considered.
/// Cells beyond the grid boundary do not exist and are never counted, so an
/// edge coordinate has at most 3 candidate neighbors and a corner at most 2.
/// The asymmetry biases evolution near edges and is deliberate.
///
/// # Panics
///
/// Panics if `(x, y)` lies outside the grid; callers must pass in-bounds
/// coordinates.
pub fn live_neighbor_count(grid: &SpriteGrid, x: usize, y: usize) -> usize {
    assert!(
        x < grid.cols() && y < grid.rows(),
        "coordinate ({x}, {y}) outside {}x{} grid",
        grid.cols(),
        grid.rows()
    );

    let alive = |x: usize, y: usize| grid.get(x, y).is_some_and(CellCode::is_alive);

    let mut count = 0;
    if x > 0 && alive(x - 1, y) {
        count += 1;
    }
    if y > 0 && alive(x, y - 1) {
        count += 1;
    }
    if alive(x + 1, y) {
        count += 1;
    }
    if alive(x, y + 1) {
        count += 1;
    }
    count
}
