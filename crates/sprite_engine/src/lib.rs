//! # Sprite Engine
//!
//! Motion, coordinate-transform and lifecycle core for 2D sprites moving
//! inside a bounded, edge-wrapping playfield.
//!
//! ## Features
//!
//! - **Entity Contract**: the [`Movable`] trait every live game object implements
//! - **Sprite Kinematics**: velocity integration, toroidal wrap, spin and expiry
//! - **Vector Rendering**: polar rotation of author-defined outline vertices
//! - **Raster Rendering**: affine composition of pre-decoded image frames
//! - **Deferred Lifecycle**: removal requests queued as commands and applied between ticks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_engine::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut rng = ChaCha8Rng::seed_from_u64(7);
//!     let mut world = World::new();
//!     let mut commands = CommandQueue::new();
//!     let mut surface = RecordingSurface::new();
//!
//!     let outline = vec![Point2::new(0, 10), Point2::new(7, -7), Point2::new(-7, -7)];
//!     let sprite = Sprite::new(&config.playfield, &mut rng, Team::Friend, 12, RenderMode::vector(outline, Color::WHITE))?;
//!     world.insert(Box::new(sprite), &mut commands);
//!
//!     world.tick(&config.playfield, &mut commands, &mut surface);
//!     world.apply_commands(&mut commands);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod render;
pub mod sprite;
pub mod commands;
pub mod world;

pub use commands::{CommandQueue, GameOp};
pub use world::{SpriteKey, World};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData, RasterMap},
        commands::{CommandQueue, GameOp},
        config::{Config, ConfigError, EngineConfig, Playfield},
        foundation::{
            math::{Affine2, Point2},
            polar::PolarPoint,
            random::{some_pos_neg_value, some_pos_value},
        },
        render::{Color, RecordingSurface, Surface, TransformGuard},
        sprite::{Movable, RenderMode, Sprite, SpriteError, Team, TickContext, VectorShape},
        world::{SpriteKey, World},
    };
}
