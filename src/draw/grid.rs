//! Fixed-size raster of nullable color tokens.

use super::Color;
use std::sync::Arc;

/// One pixel: a color token, or `None` for transparent.
pub type Cell = Option<Color>;

/// A `width × height` grid of [`Cell`]s, addressed as `(x, y)` with `y` selecting the row.
///
/// Rows are reference counted. Cloning a grid is cheap and shares every row;
/// writing through [`PixelGrid::with_cell`] or a fill copies only the rows it
/// touches, so an older grid is never affected by edits made to a newer one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl PixelGrid {
    /// Creates a fully transparent grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: (0..height).map(|_| Arc::new(vec![None; width])).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the in-bounds `(column, row)` for signed coordinates.
    pub fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width && row < self.height).then_some((col, row))
    }

    /// Whether `(x, y)` lies inside `[0, width) × [0, height)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        let (col, row) = self.index(x, y)?;
        Some(&self.rows[row][col])
    }

    /// Returns the color at `(x, y)`; `None` for transparent or out-of-bounds pixels.
    pub fn color_at(&self, x: i32, y: i32) -> Option<&Color> {
        self.cell(x, y).and_then(Option::as_ref)
    }

    /// Returns a copy with one cell replaced.
    ///
    /// `None` when `(x, y)` is out of bounds or the cell already holds `value`.
    pub fn with_cell(&self, x: i32, y: i32, value: Cell) -> Option<Self> {
        let (col, row) = self.index(x, y)?;
        if self.rows[row][col] == value {
            return None;
        }

        let mut next = self.clone();
        Arc::make_mut(&mut next.rows[row])[col] = value;
        Some(next)
    }

    pub(crate) fn cell_at(&self, col: usize, row: usize) -> &Cell {
        &self.rows[row][col]
    }

    /// Mutable access to a cell, copying its row first if it is shared.
    pub(crate) fn cell_mut(&mut self, col: usize, row: usize) -> &mut Cell {
        &mut Arc::make_mut(&mut self.rows[row])[col]
    }

    /// Returns a copy that shares no row storage with `self`.
    pub fn deep_clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            rows: self
                .rows
                .iter()
                .map(|row| Arc::new(row.as_ref().clone()))
                .collect(),
        }
    }

    /// Whether any row of `self` is the same allocation as a row of `other`.
    pub fn shares_rows_with(&self, other: &PixelGrid) -> bool {
        self.rows
            .iter()
            .any(|row| other.rows.iter().any(|theirs| Arc::ptr_eq(row, theirs)))
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Iterates over non-transparent pixels in row-major order.
    pub fn opaque_cells(&self) -> impl Iterator<Item = (usize, usize, &Color)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.as_ref().map(|color| (x, y, color)))
        })
    }

    /// Whether every cell is transparent.
    pub fn is_empty(&self) -> bool {
        self.opaque_cells().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_transparent() {
        let grid = PixelGrid::new(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.rows().count(), 2);
        assert!(grid.rows().all(|row| row.len() == 3));
        assert!(grid.is_empty());
    }

    #[test]
    fn bounds_are_half_open() {
        let grid = PixelGrid::new(4, 2);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(3, 1));
        assert!(!grid.contains(4, 0));
        assert!(!grid.contains(0, 2));
        assert!(!grid.contains(-1, 0));
        assert!(grid.cell(0, -1).is_none());
    }

    #[test]
    fn with_cell_copies_only_touched_row() {
        let grid = PixelGrid::new(2, 3);
        let next = grid.with_cell(1, 2, Some(Color::new("#fff"))).unwrap();

        assert_eq!(next.color_at(1, 2), Some(&Color::new("#fff")));
        assert!(grid.is_empty());
        assert!(Arc::ptr_eq(&grid.rows[0], &next.rows[0]));
        assert!(!Arc::ptr_eq(&grid.rows[2], &next.rows[2]));
    }

    #[test]
    fn with_cell_rejects_out_of_bounds_and_unchanged() {
        let grid = PixelGrid::new(2, 2);
        assert!(grid.with_cell(2, 0, Some(Color::new("#000"))).is_none());
        assert!(grid.with_cell(0, 0, None).is_none());
    }

    #[test]
    fn deep_clone_shares_nothing() {
        let grid = PixelGrid::new(2, 2);
        let copy = grid.deep_clone();
        assert_eq!(grid, copy);
        assert!(!grid.shares_rows_with(&copy));
        assert!(grid.shares_rows_with(&grid.clone()));
    }
}
