//! Grid-to-pixel-buffer rasterization

use image::{ImageBuffer, RgbaImage};

use crate::raster::palette::ColorMap;
use crate::spatial::cell::CellCode;
use crate::spatial::grid::SpriteGrid;

/// Rasterize a color-coded grid into a pixel buffer of the same dimensions.
///
/// Pixel `(x, y)` holds the resolved color of grid cell `(x, y)`.
pub fn rasterize(grid: &SpriteGrid, colors: &ColorMap) -> RgbaImage {
    ImageBuffer::from_fn(grid.cols() as u32, grid.rows() as u32, |x, y| {
        let code = grid
            .get(x as usize, y as usize)
            .unwrap_or(CellCode::Background);
        colors.color(code)
    })
}
