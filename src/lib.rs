//! Cellular automaton sprite generator producing small symmetric pixel-art images
//!
//! Random noise is smoothed by a fixed birth/survival rule, background cells
//! touching the shape are recoded as outline, each row is mirrored for
//! left-right symmetry, and the finished bitmap is rasterized with a
//! configurable palette.

#![forbid(unsafe_code)]

/// Cellular automaton passes: neighbor counting, evolution, outline marking
pub mod automaton;
/// Sprite assembly pipeline from noise seeding to finished pixel buffer
pub mod generator;
/// Input/output operations and error handling
pub mod io;
/// Color resolution and grid-to-image rasterization
pub mod raster;
/// Grid data structures and row mirroring
pub mod spatial;

pub use io::error::{Result, SpriteError};
