//! # Asteroids
//!
//! Game content built on `sprite_engine`: drifting rocks and the dust clouds
//! they leave behind when destroyed.

#![warn(missing_docs)]

pub mod config;
pub mod debris;
pub mod rock;

use sprite_engine::config::ConfigError;
use sprite_engine::sprite::SpriteError;
use thiserror::Error;

pub use config::{DebrisConfig, DemoConfig, GameConfig};
pub use debris::{DebrisFrames, WhiteCloudDebris};
pub use rock::Rock;

/// Errors raised while setting up a game
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A sprite could not be built
    #[error("Sprite error: {0}")]
    Sprite(#[from] SpriteError),
}
