//! Deferred lifecycle commands
//!
//! Entities never insert into or remove from the live collection while a tick
//! is iterating it. They enqueue intents here instead, and the world applies
//! them between ticks, in FIFO order.

use std::collections::VecDeque;
use std::fmt;

use crate::sprite::Movable;
use crate::world::SpriteKey;

/// A pending change to the live-entity collection
pub enum GameOp {
    /// Insert a new entity
    Add(Box<dyn Movable>),
    /// Remove the entity stored under this key
    Remove(SpriteKey),
}

impl fmt::Debug for GameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(sprite) => f
                .debug_struct("Add")
                .field("team", &sprite.team())
                .field("center", &sprite.center())
                .finish(),
            Self::Remove(key) => f.debug_tuple("Remove").field(key).finish(),
        }
    }
}

/// FIFO queue of pending lifecycle changes
#[derive(Debug, Default)]
pub struct CommandQueue {
    ops: VecDeque<GameOp>,
}

impl CommandQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an operation
    pub fn enqueue(&mut self, op: GameOp) {
        self.ops.push_back(op);
    }

    /// Queue insertion of a new entity
    pub fn enqueue_add(&mut self, sprite: Box<dyn Movable>) {
        self.enqueue(GameOp::Add(sprite));
    }

    /// Queue removal of the entity under `key`
    pub fn enqueue_remove(&mut self, key: SpriteKey) {
        self.enqueue(GameOp::Remove(key));
    }

    /// Take the oldest queued operation
    pub fn dequeue(&mut self) -> Option<GameOp> {
        self.ops.pop_front()
    }

    /// Queued operations, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &GameOp> {
        self.ops.iter()
    }

    /// Number of queued operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of queued removals targeting `key`
    pub fn removals_of(&self, key: SpriteKey) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, GameOp::Remove(k) if *k == key))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point2;
    use crate::render::Color;
    use crate::sprite::{RenderMode, Sprite, Team};

    fn boxed() -> Box<dyn Movable> {
        let render = RenderMode::vector(vec![Point2::new(0, 1)], Color::WHITE);
        Box::new(Sprite::at(Point2::new(3, 4), Team::Floater, 1, render).unwrap())
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = CommandQueue::new();
        let key = SpriteKey::default();
        queue.enqueue_add(boxed());
        queue.enqueue_remove(key);

        assert_eq!(queue.len(), 2);
        assert!(matches!(queue.dequeue(), Some(GameOp::Add(_))));
        assert!(matches!(queue.dequeue(), Some(GameOp::Remove(k)) if k == key));
        assert!(queue.dequeue().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_removals_of_counts_only_matching_key() {
        let mut queue = CommandQueue::new();
        let key = SpriteKey::default();
        queue.enqueue_remove(key);
        queue.enqueue_remove(key);
        queue.enqueue_add(boxed());
        assert_eq!(queue.removals_of(key), 2);
    }

    #[test]
    fn test_debug_names_the_operation() {
        let mut queue = CommandQueue::new();
        queue.enqueue_add(boxed());
        let text = format!("{:?}", queue.iter().next().unwrap());
        assert!(text.starts_with("Add"));
        assert!(text.contains("Floater"));
    }
}
