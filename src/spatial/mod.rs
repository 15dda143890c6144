//! Grid data structures for sprite bitmaps
//!
//! This module contains the spatial representation of sprite shape:
//! - Three-valued cell classification
//! - Rectangular grid with border growth and row mirroring

/// Three-valued cell classification
pub mod cell;
/// Rectangular cell grid and its transforms
pub mod grid;

pub use cell::CellCode;
pub use grid::SpriteGrid;
