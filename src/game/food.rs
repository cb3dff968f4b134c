use rand::Rng;
use tracing::debug;

use super::grid::{Cell, Grid};

/// The single active food cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Pick a cell uniformly among those for which `occupied` is false.
    ///
    /// Returns `None` only when every cell is occupied.
    pub fn place<R, F>(grid: &Grid, occupied: F, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
        F: Fn(Cell) -> bool,
    {
        let free: Vec<Cell> = (0..grid.cell_count())
            .filter(|&cell| !occupied(cell))
            .collect();

        if free.is_empty() {
            return None;
        }

        let cell = free[rng.gen_range(0..free.len())];
        debug!(cell, free = free.len(), "food placed");
        Some(Self { cell })
    }
}
