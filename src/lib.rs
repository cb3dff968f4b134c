//! Grid Snake - a deterministic snake engine with a headless driver
//!
//! This library provides:
//! - Core game logic (game module): board, snake, food, state machine and the `World`
//! - Line-based input mapping (input module)
//! - Session statistics (metrics module)
//! - A tick-driven session driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
