//! Fixed-order sprite assembly from noise to pixel buffer

use image::RgbaImage;
use rand::Rng;

use crate::automaton::evolution::evolve_sprite;
use crate::automaton::outline::mark_outline;
use crate::generator::noise::noise_grid;
use crate::raster::palette::{ColorConfig, ColorMap};
use crate::raster::rasterize::rasterize;
use crate::spatial::grid::SpriteGrid;

/// Generate the finished color-coded bitmap for one sprite.
///
/// Stages run in fixed order: noise seeding, two evolution steps, outline
/// marking with border growth, row mirroring. Each stage consumes the
/// previous stage's grid; nothing is shared across invocations.
pub fn generate_bitmap<R: Rng + ?Sized>(rng: &mut R) -> SpriteGrid {
    let seeded = noise_grid(rng);
    let shaped = evolve_sprite(&seeded);
    let outlined = mark_outline(&shaped);
    outlined.mirror_rows()
}

/// Generate one sprite as an RGBA pixel buffer of the native sprite size.
///
/// Colors are resolved once per sprite — outline derivation and the
/// transparency override happen here, never per pixel.
pub fn generate_sprite<R: Rng + ?Sized>(rng: &mut R, colors: &ColorConfig) -> RgbaImage {
    let color_map = ColorMap::resolve(colors);
    rasterize(&generate_bitmap(rng), &color_map)
}
