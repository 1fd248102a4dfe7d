//! Skyward - a terminal flappy-bird arcade game.
//!
//! This module exposes the game logic for testing and external use.

pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod scheduler;
pub mod scores;
pub mod ui;

pub use config::{GameConfig, HitboxShape};
pub use game::{Phase, Session};
