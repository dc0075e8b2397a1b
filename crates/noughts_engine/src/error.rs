//! Errors raised when restoring engine state from serialized input.

use crate::board::Cell;
use derive_more::{Display, Error};

/// Serialized state that breaks a board or mask invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StateError {
    /// A coordinate outside `[0, 3)`.
    #[display("cell ({col}, {row}) is off the board")]
    CellOutOfRange {
        /// Column as read.
        col: usize,
        /// Row as read.
        row: usize,
    },

    /// A mask with bits above the ninth.
    #[display("occupancy mask {bits:#b} has bits beyond the board")]
    MaskOutOfRange {
        /// Mask as read.
        bits: u16,
    },

    /// Both players claim the same cell.
    #[display("cell {cell} is claimed by both players")]
    OverlappingMasks {
        /// The contested cell.
        cell: Cell,
    },

    /// A mask and the board disagree about who owns a cell.
    #[display("mask and board disagree at {cell}")]
    MaskMismatch {
        /// The inconsistent cell.
        cell: Cell,
    },
}
