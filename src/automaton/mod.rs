//! Cellular automaton passes shaping the sprite bitmap
//!
//! A fixed birth/survival rule smooths the seeded noise into a coherent
//! shape, after which background cells adjacent to the shape are recoded as
//! outline. All passes share the same boundary-aware orthogonal neighbor
//! counting.

/// Birth/survival evolution of the noise bitmap
pub mod evolution;
/// Boundary-aware orthogonal neighbor counting
pub mod neighbors;
/// Outline marking around the evolved shape
pub mod outline;
