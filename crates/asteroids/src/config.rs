//! Game configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sprite_engine::config::{Config, ConfigError, EngineConfig};

/// Game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield and random seed
    pub engine: EngineConfig,

    /// Explosion cloud settings
    #[serde(default)]
    pub debris: DebrisConfig,

    /// Headless demo settings
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Explosion cloud configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisConfig {
    /// Animation frames in playback order
    pub frame_paths: Vec<PathBuf>,
}

impl Default for DebrisConfig {
    fn default() -> Self {
        let frame_paths = (1..=3)
            .flat_map(|row| (1..=3).map(move |column| (row, column)))
            .map(|(row, column)| PathBuf::from(format!("assets/imgs/exp/row-{row}-column-{column}.png")))
            .collect();
        Self { frame_paths }
    }
}

/// Headless demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Rocks spawned at start
    pub rock_count: u32,
    /// Ticks to simulate
    pub ticks: u32,
    /// A rock is destroyed every this many ticks
    pub kill_interval: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rock_count: 5,
            ticks: 240,
            kill_interval: 30,
        }
    }
}

impl Config for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        if self.debris.frame_paths.is_empty() {
            return Err(ConfigError::Invalid {
                field: "debris.frame_paths",
                reason: "at least one frame is required".to_string(),
            });
        }
        if self.demo.kill_interval == 0 {
            return Err(ConfigError::Invalid {
                field: "demo.kill_interval",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl GameConfig {
    /// Load configuration from `path`, or fall back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let path = path
            .to_str()
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        Self::load_from_file(path)
    }
}
