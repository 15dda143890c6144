//! Three-valued cell classification driving rasterization

/// Per-cell classification of the sprite bitmap.
///
/// `Background` and `Alive` are the only states touched by automaton
/// evolution; `Outline` is introduced by outline marking afterwards and is
/// never evolved further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellCode {
    /// Empty cell, rendered with the background color
    Background,
    /// Live cell, rendered with the main sprite color
    Alive,
    /// Background cell touching the shape, rendered with the outline color
    Outline,
}

impl CellCode {
    /// Check if the cell is live
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Check if the cell is background
    pub const fn is_background(self) -> bool {
        matches!(self, Self::Background)
    }
}
