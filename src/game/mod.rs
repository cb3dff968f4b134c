//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A presentation layer drives a [`World`] through its commands and reads it back
//! through its queries.

pub mod action;
pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod world;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use error::ConfigError;
pub use food::Food;
pub use grid::{Cell, Grid, MAX_SIZE, MIN_SIZE, Topology};
pub use snake::Snake;
pub use state::GameState;
pub use world::{CollisionType, SCORE_PER_FOOD, StepOutcome, World};
