use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::{Cell, Grid, Topology};

/// Configuration for a game world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board
    pub size: usize,
    /// Cell the snake starts on
    pub initial_head: Cell,
    /// Edge behavior
    #[serde(default)]
    pub topology: Topology,
    /// Seed for food placement; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(10, 0)
    }
}

impl GameConfig {
    /// Create a new configuration with the given board size and spawn cell
    pub fn new(size: usize, initial_head: Cell) -> Self {
        Self {
            size,
            initial_head,
            topology: Topology::default(),
            seed: None,
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(4, 5)
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the board size and spawn cell, returning the board geometry
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        let grid = Grid::new(self.size)?;
        if !grid.contains(self.initial_head) {
            return Err(ConfigError::HeadOutOfBounds {
                head: self.initial_head,
                cells: grid.cell_count(),
            });
        }
        Ok(grid)
    }
}
