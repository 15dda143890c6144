//! Color resolution and grid-to-image rasterization

/// Color configuration and per-code color resolution
pub mod palette;
/// Grid-to-pixel-buffer rasterization
pub mod rasterize;

pub use palette::{ColorConfig, ColorMap};
pub use rasterize::rasterize;
