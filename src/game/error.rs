//! Construction errors for the game world.

use derive_more::{Display, Error};

/// Rejected construction parameters.
///
/// Only construction can fail; every runtime command is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board is too small for a snake, a food cell and a free cell.
    #[display("board size {size} is below the minimum of {min}")]
    SizeTooSmall {
        /// Requested side length.
        size: usize,
        /// Smallest accepted side length.
        min: usize,
    },
    /// Board is too large to index.
    #[display("board size {size} is above the maximum of {max}")]
    SizeTooLarge {
        /// Requested side length.
        size: usize,
        /// Largest accepted side length.
        max: usize,
    },
    /// Initial head does not lie on the board.
    #[display("initial head {head} is outside the board of {cells} cells")]
    HeadOutOfBounds {
        /// Requested head cell.
        head: usize,
        /// Number of cells on the board.
        cells: usize,
    },
}
