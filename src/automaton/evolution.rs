//! Birth/survival smoothing of the noise bitmap

use crate::automaton::neighbors::live_neighbor_count;
use crate::spatial::cell::CellCode;
use crate::spatial::grid::SpriteGrid;

/// Number of evolution steps applied when shaping a sprite
pub const GENERATIONS: usize = 2;

/// Next state of a single cell under the fixed birth/survival rule.
///
/// A background cell with at most one live neighbor is born; a live cell with
/// two or three live neighbors survives; every other cell becomes background.
pub const fn next_state(current: CellCode, live_neighbors: usize) -> CellCode {
    match (current, live_neighbors) {
        (CellCode::Background, 0 | 1) | (CellCode::Alive, 2 | 3) => CellCode::Alive,
        _ => CellCode::Background,
    }
}

/// Apply one evolution step, producing a new grid of identical dimensions.
///
/// Every output cell is computed from the input grid, so neighbor counts for
/// a step never observe that step's own writes. The input grid is not
/// mutated.
pub fn evolve(grid: &SpriteGrid) -> SpriteGrid {
    SpriteGrid::from_fn(grid.rows(), grid.cols(), |x, y| {
        let current = grid.get(x, y).unwrap_or(CellCode::Background);
        next_state(current, live_neighbor_count(grid, x, y))
    })
}

/// Apply the fixed number of evolution steps used by the sprite pipeline
pub fn evolve_sprite(grid: &SpriteGrid) -> SpriteGrid {
    (0..GENERATIONS).fold(grid.clone(), |state, _| evolve(&state))
}
