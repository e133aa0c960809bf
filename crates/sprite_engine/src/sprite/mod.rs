//! Sprites and the entity contract
//!
//! Every live game object implements [`Movable`]. Most implement it by
//! embedding a [`Sprite`], which carries the shared kinematics, wrap, spin and
//! expiry behavior along with the vector and raster render helpers.

mod base;
mod raster;
mod vector;

pub use base::{RenderMode, Sprite};
pub use raster::raster_transform;
pub use vector::VectorShape;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commands::CommandQueue;
use crate::config::Playfield;
use crate::foundation::math::Point2;
use crate::render::Surface;
use crate::world::SpriteKey;

/// Coarse interaction category read by collision handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// The player and the player's shots
    Friend,
    /// Asteroids and enemy ships
    Foe,
    /// Pickups drifting across the field
    Floater,
    /// Inert effects that collide with nothing
    Debris,
}

/// Sprite construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// The bounding radius must be positive
    #[error("Sprite radius must be positive, got {0}")]
    InvalidRadius(u32),

    /// A raster sprite needs at least one frame slot
    #[error("Raster sprite has no frames")]
    NoFrames,
}

/// Per-entity view of the current tick
pub struct TickContext<'a> {
    /// Playfield bounds
    pub playfield: &'a Playfield,
    /// Queue for deferred lifecycle changes
    pub commands: &'a mut CommandQueue,
    /// Key of the entity being advanced
    pub key: SpriteKey,
}

impl<'a> TickContext<'a> {
    /// Create a context for advancing the entity stored under `key`
    pub fn new(playfield: &'a Playfield, commands: &'a mut CommandQueue, key: SpriteKey) -> Self {
        Self {
            playfield,
            commands,
            key,
        }
    }

    /// Ask for the current entity to be removed once the tick is over
    pub fn remove_self(&mut self) {
        self.commands.enqueue_remove(self.key);
    }
}

/// The entity contract
///
/// Once per tick the world calls [`Movable::advance`] and then
/// [`Movable::draw`] on every live entity, in collection order. Entities never
/// add or remove entities directly; they enqueue commands.
pub trait Movable {
    /// Advance motion and lifecycle state by one tick
    fn advance(&mut self, ctx: &mut TickContext<'_>);

    /// Render the current state
    ///
    /// Must not change position, velocity, orientation or expiry. Animation
    /// bookkeeping (such as a frame index) may change.
    fn draw(&mut self, surface: &mut dyn Surface);

    /// Center point in playfield pixels
    fn center(&self) -> Point2;

    /// Bounding radius in pixels
    fn radius(&self) -> u32;

    /// Interaction category
    fn team(&self) -> Team;

    /// Called when another entity destroyed this one
    fn dead(&mut self, _commands: &mut CommandQueue) {}

    /// Called immediately before this entity is inserted into the world
    fn add(&mut self, _commands: &mut CommandQueue) {}

    /// Called immediately after this entity is removed from the world
    fn remove(&mut self, _commands: &mut CommandQueue) {}
}
