//! The 3x3 grid and its coordinates.

use crate::error::StateError;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: usize = 3;

/// A coordinate on the board, both axes in `[0, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    col: usize,
    row: usize,
}

/// Unchecked wire form of [`Cell`].
#[derive(Deserialize)]
struct RawCell {
    col: usize,
    row: usize,
}

impl TryFrom<RawCell> for Cell {
    type Error = StateError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.col, raw.row).ok_or(StateError::CellOutOfRange {
            col: raw.col,
            row: raw.row,
        })
    }
}

impl Cell {
    /// All cells in bit order (row-major).
    pub const ALL: [Cell; 9] = [
        Cell { col: 0, row: 0 },
        Cell { col: 1, row: 0 },
        Cell { col: 2, row: 0 },
        Cell { col: 0, row: 1 },
        Cell { col: 1, row: 1 },
        Cell { col: 2, row: 1 },
        Cell { col: 0, row: 2 },
        Cell { col: 1, row: 2 },
        Cell { col: 2, row: 2 },
    ];

    /// Creates a cell, or `None` if either coordinate is off the board.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        (col < BOARD_SIZE && row < BOARD_SIZE).then_some(Self { col, row })
    }

    /// Creates a cell from its bit index (`row * 3 + col`).
    pub fn from_bit(bit: usize) -> Option<Self> {
        Self::ALL.get(bit).copied()
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Bit index of this cell in an occupancy mask.
    pub fn bit(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// 3x3 board of marks, indexed by (column, row).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Marks stored column-major: `cells[col][row]`.
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at (col, row), `None` when off the board.
    pub fn get(&self, col: usize, row: usize) -> Option<Mark> {
        self.cells.get(col)?.get(row).copied()
    }

    /// Gets the mark in a validated cell.
    pub fn mark(&self, cell: Cell) -> Mark {
        self.cells[cell.col][cell.row]
    }

    pub(crate) fn set(&mut self, cell: Cell, mark: Mark) {
        self.cells[cell.col][cell.row] = mark;
    }

    /// Number of unclaimed cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|m| m.is_empty()).count()
    }

    /// Checks if every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Returns every cell to [`Mark::Empty`].
    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Iterates cells with their marks in bit order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Mark)> + '_ {
        Cell::ALL.into_iter().map(|cell| (cell, self.mark(cell)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[col][row])?;
            }
        }
        Ok(())
    }
}
