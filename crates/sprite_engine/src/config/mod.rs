//! Configuration system
//!
//! Playfield bounds and the random seed are handed to every sprite operation
//! explicitly instead of living in process-wide globals.

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        let config: Self = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        log::info!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Check value constraints that serde cannot express
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value parsed but is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Playfield bounds in pixels
///
/// Both sides must be at least 2 so that the wrap targets `1` and `size - 1`
/// are distinct in-bounds coordinates. Every constructor, deserialization
/// included, enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlayfield", into = "RawPlayfield")]
pub struct Playfield {
    width: i32,
    height: i32,
}

/// Unchecked on-disk form of [`Playfield`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPlayfield {
    width: i32,
    height: i32,
}

impl TryFrom<RawPlayfield> for Playfield {
    type Error = ConfigError;

    fn try_from(raw: RawPlayfield) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl From<Playfield> for RawPlayfield {
    fn from(playfield: Playfield) -> Self {
        Self {
            width: playfield.width,
            height: playfield.height,
        }
    }
}

impl Playfield {
    /// Smallest accepted side length
    pub const MIN_SIDE: i32 = 2;

    /// Create validated playfield bounds
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        let playfield = Self { width, height };
        playfield.check()?;
        Ok(playfield)
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.height
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.width < Self::MIN_SIDE {
            return Err(ConfigError::Invalid {
                field: "playfield.width",
                reason: format!("{} is below {}", self.width, Self::MIN_SIDE),
            });
        }
        if self.height < Self::MIN_SIDE {
            return Err(ConfigError::Invalid {
                field: "playfield.height",
                reason: format!("{} is below {}", self.height, Self::MIN_SIDE),
            });
        }
        Ok(())
    }

    /// Whether `(x, y)` lies in the half-open rectangle `[0, width) x [0, height)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 900,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Playfield bounds
    pub playfield: Playfield,

    /// Seed for the shared random source; `None` seeds from entropy
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Config for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.playfield.check()
    }
}
