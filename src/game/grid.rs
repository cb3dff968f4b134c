use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::ConfigError;

/// Index into the row-major flattened board
pub type Cell = usize;

/// Smallest side length that fits a snake, a food cell and a free cell
pub const MIN_SIZE: usize = 4;

/// Largest accepted side length
pub const MAX_SIZE: usize = 4096;

/// What happens at the edges of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Leaving one edge re-enters from the opposite edge
    #[default]
    WrapAround,
    /// Leaving the board is a collision
    Walled,
}

/// Square board geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
}

impl Grid {
    pub fn new(width: usize) -> Result<Self, ConfigError> {
        if width < MIN_SIZE {
            return Err(ConfigError::SizeTooSmall {
                size: width,
                min: MIN_SIZE,
            });
        }
        if width > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: width,
                max: MAX_SIZE,
            });
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.width
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell < self.cell_count()
    }

    pub fn to_index(&self, row: usize, col: usize) -> Cell {
        row * self.width + col
    }

    pub fn to_coords(&self, cell: Cell) -> (usize, usize) {
        (cell / self.width, cell % self.width)
    }

    /// Cell one step from `cell` in `direction`.
    ///
    /// Always `Some` under [`Topology::WrapAround`]; `None` when a walled board
    /// would be left.
    pub fn neighbour(&self, cell: Cell, direction: Direction, topology: Topology) -> Option<Cell> {
        let (row, col) = self.to_coords(cell);
        let (dr, dc) = direction.delta();
        let n = self.width as isize;
        let next_row = row as isize + dr;
        let next_col = col as isize + dc;

        match topology {
            Topology::WrapAround => Some(self.to_index(
                next_row.rem_euclid(n) as usize,
                next_col.rem_euclid(n) as usize,
            )),
            Topology::Walled => {
                if (0..n).contains(&next_row) && (0..n).contains(&next_col) {
                    Some(self.to_index(next_row as usize, next_col as usize))
                } else {
                    None
                }
            }
        }
    }
}
