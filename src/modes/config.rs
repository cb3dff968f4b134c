//! Session driver configuration

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::{Cell, GameConfig, Topology};

/// Settings for a headless play session
///
/// Loaded from JSON or assembled from command line flags.
///
/// # Example
///
/// ```rust
/// use grid_snake::modes::SessionConfig;
///
/// let config = SessionConfig {
///     size: 12,
///     ..Default::default()
/// };
/// assert_eq!(config.tick_ms, 166);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side length of the board
    ///
    /// Default: 10
    pub size: usize,

    /// Spawn cell of the first game; random when absent
    pub spawn: Option<Cell>,

    /// Edge behavior
    ///
    /// Default: wrap-around
    pub topology: Topology,

    /// Base seed for food placement; each restart offsets it by the round number
    pub seed: Option<u64>,

    /// Milliseconds between ticks
    ///
    /// Default: 166 (six ticks per second)
    pub tick_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 10,
            spawn: None,
            topology: Topology::WrapAround,
            seed: None,
            tick_ms: 1000 / 6,
        }
    }
}

impl SessionConfig {
    /// Read a config from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Game config for the given round (0 for the first game).
    ///
    /// Only round 0 honors `spawn`; every restart spawns on a random cell.
    pub fn game_config<R: Rng + ?Sized>(&self, round: u64, rng: &mut R) -> GameConfig {
        // Oversized boards are rejected when the world validates the config
        let cells = self.size.checked_mul(self.size).unwrap_or(1).max(1);
        let initial_head = match (round, self.spawn) {
            (0, Some(spawn)) => spawn,
            _ => rng.gen_range(0..cells),
        };

        let mut config = GameConfig::new(self.size, initial_head).with_topology(self.topology);
        config.seed = self.seed.map(|seed| seed.wrapping_add(round));
        config
    }
}
