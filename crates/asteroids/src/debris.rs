//! Explosion cloud left behind by destroyed sprites

use sprite_engine::assets::RasterMap;
use sprite_engine::foundation::math::Point2;
use sprite_engine::render::Surface;
use sprite_engine::sprite::{Movable, RenderMode, Sprite, SpriteError, Team, TickContext};

use crate::config::DebrisConfig;

/// Shared, decoded explosion frames
///
/// Loaded once at startup; every cloud clones the handle, not the pixels.
#[derive(Debug, Clone)]
pub struct DebrisFrames {
    frames: RasterMap,
}

impl DebrisFrames {
    /// Load the frames listed in `config`; unreadable frames stay as empty slots
    pub fn load(config: &DebrisConfig) -> Self {
        let frames = RasterMap::load_sequence(&config.frame_paths);
        log::info!(
            "Loaded {}/{} explosion frames",
            frames.loaded(),
            frames.len()
        );
        Self { frames }
    }

    /// Wrap frames decoded elsewhere
    pub fn from_map(frames: RasterMap) -> Self {
        Self { frames }
    }

    /// Number of frame slots
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frame slots
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// A short-lived dust cloud playing the explosion frames at half the tick rate
#[derive(Debug, Clone)]
pub struct WhiteCloudDebris {
    sprite: Sprite,
    index: u32,
    frame_count: u32,
}

impl WhiteCloudDebris {
    /// Cloud radius relative to the exploding sprite
    pub const RADIUS_SCALE: f64 = 1.3;

    /// Ticks each frame stays on screen
    pub const TICKS_PER_FRAME: u32 = 2;

    /// Spawn a cloud where `parent` exploded
    ///
    /// The cloud keeps drifting and spinning like its parent, is a bit larger,
    /// and never interacts with anything.
    pub fn new(parent: &Sprite, frames: &DebrisFrames) -> Result<Self, SpriteError> {
        let radius = (f64::from(parent.radius()) * Self::RADIUS_SCALE) as u32;
        let mut sprite = Sprite::at(
            parent.center(),
            Team::Debris,
            radius,
            RenderMode::raster(frames.frames.clone()),
        )?;

        sprite.set_spin(parent.spin());
        sprite.set_velocity(parent.delta_x(), parent.delta_y());
        let frame_count = u32::try_from(frames.len()).unwrap_or(u32::MAX / Self::TICKS_PER_FRAME);
        sprite.set_expiry(frame_count * Self::TICKS_PER_FRAME);

        Ok(Self {
            sprite,
            index: 0,
            frame_count,
        })
    }

    /// Frame drawn on the next `draw`
    pub fn frame_index(&self) -> u32 {
        self.index
    }

    /// Underlying sprite state
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Movable for WhiteCloudDebris {
    fn advance(&mut self, ctx: &mut TickContext<'_>) {
        self.sprite.step(ctx);
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.sprite.render_frame(surface, self.index);
        // expiry already ticked down this tick; even values close a frame's hold
        if self.sprite.expiry() % Self::TICKS_PER_FRAME == 0 && self.index < self.frame_count {
            self.index += 1;
        }
    }

    fn center(&self) -> Point2 {
        self.sprite.center()
    }

    fn radius(&self) -> u32 {
        self.sprite.radius()
    }

    fn team(&self) -> Team {
        self.sprite.team()
    }
}
