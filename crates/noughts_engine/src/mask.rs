//! Occupancy bitmasks and the winning-pattern table.

use crate::board::Cell;
use crate::error::StateError;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// The eight winning lines as 9-bit masks, bit `row * 3 + col`.
pub const WIN_PATTERNS: [u16; 8] = [
    // Rows
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    // Columns
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    // Diagonals
    0b100_010_001,
    0b001_010_100,
];

const BOARD_MASK: u16 = 0x1ff;

/// Set of cells claimed by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16")]
pub struct Occupancy(u16);

impl TryFrom<u16> for Occupancy {
    type Error = StateError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        if bits & !BOARD_MASK != 0 {
            return Err(StateError::MaskOutOfRange { bits });
        }
        Ok(Self(bits))
    }
}

impl Occupancy {
    /// No cells claimed.
    pub const EMPTY: Occupancy = Occupancy(0);

    /// Raw mask value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns the mask with `cell` added.
    pub fn with(self, cell: Cell) -> Self {
        Self(self.0 | 1 << cell.bit())
    }

    /// Checks whether `cell` is claimed.
    pub fn contains(self, cell: Cell) -> bool {
        self.0 & 1 << cell.bit() != 0
    }

    /// Number of claimed cells.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// True when no cell is in both masks.
    pub fn is_disjoint(self, other: Occupancy) -> bool {
        self.0 & other.0 == 0
    }

    /// True when every bit of `pattern` is claimed.
    pub fn covers(self, pattern: u16) -> bool {
        pattern & self.0 == pattern
    }

    /// Returns the first winning line this mask completes.
    pub fn winning_line(self) -> Option<WinLine> {
        WinLine::iter().find(|line| self.covers(line.pattern()))
    }
}

/// Names for the entries of [`WIN_PATTERNS`], in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum WinLine {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    MainDiagonal,
    /// (2,0) to (0,2).
    AntiDiagonal,
}

impl WinLine {
    /// The 9-bit mask for this line.
    pub fn pattern(self) -> u16 {
        WIN_PATTERNS[self as usize]
    }

    /// The three cells on this line, in bit order.
    pub fn cells(self) -> [Cell; 3] {
        let on_line = Occupancy(self.pattern());
        let mut cells = [Cell::ALL[0]; 3];
        let mut found = 0;
        for cell in Cell::ALL {
            if on_line.contains(cell) {
                cells[found] = cell;
                found += 1;
            }
        }
        cells
    }
}
