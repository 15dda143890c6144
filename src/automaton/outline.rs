//! Outline marking around the evolved sprite shape

use crate::automaton::neighbors::live_neighbor_count;
use crate::spatial::cell::CellCode;
use crate::spatial::grid::SpriteGrid;

/// Grow the grid and mark background cells that touch the shape as outline.
///
/// The grid first gains a one-cell `Background` border on the top, bottom and
/// left edges; the right edge stays untouched because mirroring supplies the
/// right half of the artwork. Once the full grown grid exists, every
/// `Background` cell with at least one live orthogonal neighbor is recoded to
/// `Outline` — including cells of the freshly inserted border. `Alive` cells
/// never change, and outline cells do not count as live, so marking cannot
/// cascade.
pub fn mark_outline(grid: &SpriteGrid) -> SpriteGrid {
    let grown = grid.with_border(1, 1, 1, 0);

    SpriteGrid::from_fn(grown.rows(), grown.cols(), |x, y| match grown.get(x, y) {
        Some(CellCode::Background) if live_neighbor_count(&grown, x, y) > 0 => CellCode::Outline,
        Some(code) => code,
        None => CellCode::Background,
    })
}
