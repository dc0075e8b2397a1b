//! Mapping between terminal coordinates, board cells and canvas space.
//!
//! The canvas spans one unit per cell, so a board is `3.0` wide and tall.
//! Canvas `y` grows upward while rows grow downward on screen.

use derive_new::new;
use noughts_engine::{BOARD_SIZE, Cell};
use ratatui::layout::Rect;
use tracing::instrument;

const SIDE: f64 = BOARD_SIZE as f64;

/// The screen rectangle the board is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct BoardGeometry {
    area: Rect,
}

impl BoardGeometry {
    /// Largest roughly square board that fits in `area`, centered.
    ///
    /// Terminal cells are about twice as tall as wide, so the board is
    /// twice as many columns as rows. Both are multiples of three so every
    /// cell gets the same number of terminal cells.
    #[instrument]
    pub fn fit(area: Rect) -> Self {
        let side = BOARD_SIZE as u16;
        let height = area.height.min(area.width / 2) / side * side;
        let width = height * 2;
        Self {
            area: Rect::new(
                area.x + (area.width - width) / 2,
                area.y + (area.height - height) / 2,
                width,
                height,
            ),
        }
    }

    /// The board rectangle.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Converts a pointer position to (column, row) by integer division.
    ///
    /// Positions left of or above the board give `None`. Positions right of
    /// or below it give indices of 3 or more; the engine rejects those.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if self.area.is_empty() || x < self.area.x || y < self.area.y {
            return None;
        }
        let col = usize::from(x - self.area.x) * BOARD_SIZE / usize::from(self.area.width);
        let row = usize::from(y - self.area.y) * BOARD_SIZE / usize::from(self.area.height);
        Some((col, row))
    }

    /// Canvas bounds along either axis.
    pub fn canvas_bounds() -> [f64; 2] {
        [0.0, SIDE]
    }

    /// Canvas coordinates of the top-left corner of `cell`.
    pub fn cell_origin(cell: Cell) -> (f64, f64) {
        (cell.col() as f64, SIDE - cell.row() as f64)
    }

    /// Canvas coordinates of the center of `cell`.
    pub fn cell_center(cell: Cell) -> (f64, f64) {
        let (x, y) = Self::cell_origin(cell);
        (x + 0.5, y - 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fit_is_square_and_centered() {
        let geometry = BoardGeometry::fit(Rect::new(0, 0, 80, 20));
        assert_eq!(geometry.area(), Rect::new(22, 1, 36, 18));
    }

    #[test]
    fn test_fit_narrow_area() {
        let geometry = BoardGeometry::fit(Rect::new(0, 0, 13, 40));
        assert_eq!(geometry.area().width, 12);
        assert_eq!(geometry.area().height, 6);
    }

    #[test]
    fn test_cell_at_corners() {
        let geometry = BoardGeometry::new(Rect::new(10, 5, 30, 15));
        assert_eq!(geometry.cell_at(10, 5), Some((0, 0)));
        assert_eq!(geometry.cell_at(39, 19), Some((2, 2)));
        assert_eq!(geometry.cell_at(20, 9), Some((1, 0)));
        assert_eq!(geometry.cell_at(9, 5), None);
        assert_eq!(geometry.cell_at(10, 4), None);
        assert_eq!(geometry.cell_at(40, 20), Some((3, 3)));
    }

    #[test]
    fn test_empty_area_maps_nothing() {
        let geometry = BoardGeometry::fit(Rect::new(0, 0, 4, 2));
        assert!(geometry.area().is_empty());
        assert_eq!(geometry.cell_at(0, 0), None);
    }

    #[test]
    fn test_canvas_coordinates_flip_rows() {
        let top_left = Cell::new(0, 0).unwrap();
        let bottom_right = Cell::new(2, 2).unwrap();
        assert_eq!(BoardGeometry::cell_origin(top_left), (0.0, 3.0));
        assert_eq!(BoardGeometry::cell_center(top_left), (0.5, 2.5));
        assert_eq!(BoardGeometry::cell_center(bottom_right), (2.5, 0.5));
    }

    proptest! {
        #[test]
        fn points_inside_map_to_board_cells(
            (w, h) in (1u16..60, 1u16..60),
            (dx, dy) in (0u16..60, 0u16..60),
        ) {
            let geometry = BoardGeometry::new(Rect::new(3, 2, w, h));
            let (x, y) = (3 + dx % w, 2 + dy % h);
            let (col, row) = geometry.cell_at(x, y).unwrap();
            prop_assert!(col < 3 && row < 3);
        }
    }
}
