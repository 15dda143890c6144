//! Rectangular cell grid with border growth and row mirroring
//!
//! The grid is the working representation of sprite shape, handed from one
//! pipeline stage to the next. Every transform produces a new grid; stages
//! never mutate their input.

use ndarray::Array2;

use crate::spatial::cell::CellCode;

/// Rectangular matrix of cell codes.
///
/// Coordinates are `(x, y)` with `x` the column index (left to right) and `y`
/// the row index (top to bottom). Out-of-range queries return `None`; there is
/// no wraparound and no implicit padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteGrid {
    cells: Array2<CellCode>,
}

impl SpriteGrid {
    /// Create a grid with every cell set to the same code
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero; the pipeline never operates on
    /// degenerate grids.
    pub fn filled(rows: usize, cols: usize, code: CellCode) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be at least 1x1");
        Self {
            cells: Array2::from_elem((rows, cols), code),
        }
    }

    /// Create a grid by evaluating `cell` at every `(x, y)` coordinate,
    /// visiting cells in row-major order
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut cell: impl FnMut(usize, usize) -> CellCode,
    ) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be at least 1x1");
        Self {
            cells: Array2::from_shape_fn((rows, cols), |(y, x)| cell(x, y)),
        }
    }

    /// Create a grid from explicit rows, top to bottom
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, the first row is empty, or the rows differ
    /// in length; a non-rectangular grid is a contract violation.
    pub fn from_rows(rows: &[&[CellCode]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(height > 0 && width > 0, "grid dimensions must be at least 1x1");
        assert!(
            rows.iter().all(|row| row.len() == width),
            "grid rows must all have equal length"
        );

        Self::from_fn(height, width, |x, y| {
            rows.get(y)
                .and_then(|row| row.get(x))
                .copied()
                .unwrap_or(CellCode::Background)
        })
    }

    /// Number of rows (grid height)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (grid width)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell at `(x, y)`, or `None` when the coordinate is outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<CellCode> {
        self.cells.get([y, x]).copied()
    }

    /// Iterate all cells in row-major order with their `(x, y)` coordinates
    pub fn indexed_cells(&self) -> impl Iterator<Item = (usize, usize, CellCode)> + '_ {
        self.cells.indexed_iter().map(|((y, x), &code)| (x, y, code))
    }

    /// Grow the grid with a `Background` border of the given widths.
    ///
    /// Existing cells keep their relative positions, shifted right by `left`
    /// and down by `top`.
    pub fn with_border(&self, top: usize, bottom: usize, left: usize, right: usize) -> Self {
        let rows = self.rows() + top + bottom;
        let cols = self.cols() + left + right;
        let mut grown = Array2::from_elem((rows, cols), CellCode::Background);

        for ((y, x), &code) in self.cells.indexed_iter() {
            if let Some(cell) = grown.get_mut([y + top, x + left]) {
                *cell = code;
            }
        }

        Self { cells: grown }
    }

    /// Double the grid width by appending each row's reverse to itself.
    ///
    /// Column `x` and column `2W - 1 - x` of the result are always identical
    /// for input width `W`, producing left-right symmetric artwork. Row order
    /// is preserved.
    pub fn mirror_rows(&self) -> Self {
        let width = self.cols();
        Self::from_fn(self.rows(), width * 2, |x, y| {
            let source_x = if x < width { x } else { 2 * width - 1 - x };
            self.get(source_x, y).unwrap_or(CellCode::Background)
        })
    }
}
