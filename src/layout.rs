//! Grid placement and viewport scrolling.
//!
//! Icons fill the grid row by row. The first two rows are pinned: as long as
//! the selection is in row 0 or 1 nothing moves. From row 2 on the grid
//! scrolls up one cell per row so the active row always sits second from the
//! top.

use embedded_graphics::prelude::Point;

use crate::config::{CELL_SIZE, GRID_COLUMNS, GRID_MARGIN_X, GRID_MARGIN_Y, PINNED_ROWS};

/// Fixed grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub cell_size: i32,
    /// Icon centre of cell `(0, 0)`.
    pub origin: Point,
}

impl GridLayout {
    /// The badge launcher grid: 3 columns of 48px cells.
    pub const BADGE: Self = Self {
        columns: GRID_COLUMNS,
        cell_size: CELL_SIZE,
        origin: Point::new(GRID_MARGIN_X, GRID_MARGIN_Y),
    };

    /// `(column, row)` of item `index`.
    #[inline]
    pub const fn cell(
        &self,
        index: usize,
    ) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    #[inline]
    pub const fn row(
        &self,
        index: usize,
    ) -> usize {
        index / self.columns
    }

    /// Unscrolled icon centre of item `index`.
    pub const fn position(
        &self,
        index: usize,
    ) -> Point {
        let (col, row) = self.cell(index);
        Point::new(
            self.origin.x + col as i32 * self.cell_size,
            self.origin.y + row as i32 * self.cell_size,
        )
    }

    /// Vertical offset applied to the whole grid while `active` is selected.
    pub const fn scroll_offset(
        &self,
        active: usize,
    ) -> i32 {
        let row = self.row(active);
        if row >= PINNED_ROWS {
            -self.cell_size * (row as i32 - 1)
        } else {
            0
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self { Self::BADGE }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridLayout = GridLayout::BADGE;

    #[test]
    fn test_position_first_cells() {
        assert_eq!(GRID.position(0), Point::new(33, 42));
        assert_eq!(GRID.position(1), Point::new(81, 42));
        assert_eq!(GRID.position(2), Point::new(129, 42));
        assert_eq!(GRID.position(3), Point::new(33, 90));
        assert_eq!(GRID.position(7), Point::new(81, 138));
    }

    #[test]
    fn test_cell_and_row() {
        assert_eq!(GRID.cell(5), (2, 1));
        assert_eq!(GRID.row(6), 2);
    }

    #[test]
    fn test_scroll_offset_pinned_rows() {
        // Row 0
        assert_eq!(GRID.scroll_offset(0), 0);
        assert_eq!(GRID.scroll_offset(2), 0);
        // Row 1
        assert_eq!(GRID.scroll_offset(3), 0);
        assert_eq!(GRID.scroll_offset(5), 0);
    }

    #[test]
    fn test_scroll_offset_scrolling_rows() {
        // Row 2
        assert_eq!(GRID.scroll_offset(6), -48);
        // Row 3
        assert_eq!(GRID.scroll_offset(9), -96);
        // Row 5
        assert_eq!(GRID.scroll_offset(15), -192);
    }

    #[test]
    fn test_active_row_stays_on_screen() {
        for active in 0..16 {
            let y = GRID.position(active).y + GRID.scroll_offset(active);
            assert!((0..120).contains(&y), "index {active} at y {y}");
        }
    }
}
