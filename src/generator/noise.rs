//! White-noise seeding of the initial sprite bitmap

use rand::Rng;

use crate::spatial::cell::CellCode;
use crate::spatial::grid::SpriteGrid;

/// Height of the seeded noise grid
pub const NOISE_ROWS: usize = 8;

/// Width of the seeded noise grid; mirroring later doubles the sprite width
pub const NOISE_COLS: usize = 4;

/// Produce the initial random bitmap.
///
/// Every cell is independently `Alive` or `Background` with equal
/// probability, consuming exactly one draw per cell from `rng` in row-major
/// order.
pub fn noise_grid<R: Rng + ?Sized>(rng: &mut R) -> SpriteGrid {
    SpriteGrid::from_fn(NOISE_ROWS, NOISE_COLS, |_, _| {
        if rng.random::<bool>() {
            CellCode::Alive
        } else {
            CellCode::Background
        }
    })
}
