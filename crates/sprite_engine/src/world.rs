//! Live-entity collection
//!
//! Entities live in slots keyed by [`SpriteKey`]; an order vector keeps
//! iteration in insertion order. A tick borrows the world mutably for its
//! whole duration, so nothing can insert or remove mid-iteration: lifecycle
//! changes raised during the tick go through the [`CommandQueue`] and are
//! applied by [`World::apply_commands`] afterwards.

use slotmap::{new_key_type, SlotMap};

use crate::commands::{CommandQueue, GameOp};
use crate::config::Playfield;
use crate::render::Surface;
use crate::sprite::{Movable, Team, TickContext};

new_key_type! {
    /// Stable identity of a live entity
    pub struct SpriteKey;
}

/// The live entities of a game
pub struct World {
    sprites: SlotMap<SpriteKey, Box<dyn Movable>>,
    order: Vec<SpriteKey>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            sprites: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Insert an entity now, running its `add` hook first
    ///
    /// Only call this between ticks.
    pub fn insert(&mut self, mut sprite: Box<dyn Movable>, commands: &mut CommandQueue) -> SpriteKey {
        sprite.add(commands);
        let key = self.sprites.insert(sprite);
        self.order.push(key);
        log::debug!("Added entity {:?} ({} live)", key, self.order.len());
        key
    }

    /// Remove an entity now, running its `remove` hook afterwards
    ///
    /// Returns the entity, or `None` if the key is no longer live.
    pub fn take(&mut self, key: SpriteKey, commands: &mut CommandQueue) -> Option<Box<dyn Movable>> {
        let Some(mut sprite) = self.sprites.remove(key) else {
            log::debug!("Ignoring removal of stale entity {:?}", key);
            return None;
        };
        self.order.retain(|k| *k != key);
        sprite.remove(commands);
        log::debug!("Removed entity {:?} ({} live)", key, self.order.len());
        Some(sprite)
    }

    /// Run one tick: `advance` then `draw` for every entity, in order
    pub fn tick(&mut self, playfield: &Playfield, commands: &mut CommandQueue, surface: &mut dyn Surface) {
        for &key in &self.order {
            let Some(sprite) = self.sprites.get_mut(key) else {
                continue;
            };
            let mut ctx = TickContext::new(playfield, commands, key);
            sprite.advance(&mut ctx);
            sprite.draw(surface);
        }
    }

    /// Apply queued commands until the queue is empty
    ///
    /// Hooks may enqueue further commands; those are applied in the same call.
    /// Returns how many commands were applied.
    pub fn apply_commands(&mut self, commands: &mut CommandQueue) -> usize {
        let mut applied = 0;
        while let Some(op) = commands.dequeue() {
            match op {
                GameOp::Add(sprite) => {
                    self.insert(sprite, commands);
                }
                GameOp::Remove(key) => {
                    self.take(key, commands);
                }
            }
            applied += 1;
        }
        applied
    }

    /// Eliminate an entity: run its `dead` hook and queue its removal
    ///
    /// Returns `false` if the key is not live.
    pub fn kill(&mut self, key: SpriteKey, commands: &mut CommandQueue) -> bool {
        let Some(sprite) = self.sprites.get_mut(key) else {
            return false;
        };
        sprite.dead(commands);
        commands.enqueue_remove(key);
        true
    }

    /// Entity under `key`
    pub fn get(&self, key: SpriteKey) -> Option<&(dyn Movable + 'static)> {
        self.sprites.get(key).map(|sprite| &**sprite)
    }

    /// Mutable entity under `key`
    pub fn get_mut(&mut self, key: SpriteKey) -> Option<&mut (dyn Movable + 'static)> {
        self.sprites.get_mut(key).map(|sprite| &mut **sprite)
    }

    /// Whether `key` is live
    pub fn contains(&self, key: SpriteKey) -> bool {
        self.sprites.contains_key(key)
    }

    /// Live entities in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (SpriteKey, &(dyn Movable + 'static))> + '_ {
        self.order
            .iter()
            .filter_map(|&key| self.sprites.get(key).map(|sprite| (key, &**sprite)))
    }

    /// Keys of live entities on `team`, in iteration order
    pub fn keys_on_team(&self, team: Team) -> Vec<SpriteKey> {
        self.iter()
            .filter(|(_, sprite)| sprite.team() == team)
            .map(|(key, _)| key)
            .collect()
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
