//! Shared sprite kinematics and lifecycle

use rand::Rng;

use super::vector::VectorShape;
use super::{Movable, SpriteError, Team, TickContext};
use crate::assets::RasterMap;
use crate::config::Playfield;
use crate::foundation::math::{utils, Point2};
use crate::render::{Color, Surface};

/// How a sprite is drawn; exactly one payload per sprite
#[derive(Debug, Clone)]
pub enum RenderMode {
    /// Rotated outline through fixed offset vertices
    Vector(VectorShape),
    /// Keyed sequence of decoded images
    Raster(RasterMap),
}

impl RenderMode {
    /// Vector mode from author-defined offset vertices (y up) and an outline color
    pub fn vector(cartesians: Vec<Point2>, color: Color) -> Self {
        Self::Vector(VectorShape::new(cartesians, color))
    }

    /// Raster mode from a frame sequence
    pub fn raster(frames: RasterMap) -> Self {
        Self::Raster(frames)
    }

    /// Whether this is the vector payload
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }
}

/// Position, motion and lifecycle shared by every sprite
#[derive(Debug, Clone)]
pub struct Sprite {
    center: Point2,
    delta_x: f64,
    delta_y: f64,
    team: Team,
    radius: u32,
    /// Degrees, kept in `[0, 360)`
    orientation: i32,
    /// Degrees per tick
    spin: i32,
    /// Ticks left to live; 0 means immortal
    expiry: u32,
    render: RenderMode,
}

impl Sprite {
    /// Create a sprite at a random point of the playfield
    ///
    /// The sprite starts at rest, unrotated, non-spinning and immortal.
    pub fn new<R: Rng + ?Sized>(
        playfield: &Playfield,
        rng: &mut R,
        team: Team,
        radius: u32,
        render: RenderMode,
    ) -> Result<Self, SpriteError> {
        let center = Point2::new(
            rng.gen_range(0..playfield.width()),
            rng.gen_range(0..playfield.height()),
        );
        Self::at(center, team, radius, render)
    }

    /// Create a sprite at a known center
    pub fn at(center: Point2, team: Team, radius: u32, render: RenderMode) -> Result<Self, SpriteError> {
        if radius == 0 {
            return Err(SpriteError::InvalidRadius(0));
        }
        if let RenderMode::Raster(frames) = &render {
            if frames.is_empty() {
                return Err(SpriteError::NoFrames);
            }
        }

        Ok(Self {
            center,
            delta_x: 0.0,
            delta_y: 0.0,
            team,
            radius,
            orientation: 0,
            spin: 0,
            expiry: 0,
            render,
        })
    }

    /// Center point in playfield pixels
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Move the center
    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// Horizontal velocity in pixels per tick
    pub fn delta_x(&self) -> f64 {
        self.delta_x
    }

    /// Vertical velocity in pixels per tick (y grows downward)
    pub fn delta_y(&self) -> f64 {
        self.delta_y
    }

    /// Set both velocity components
    pub fn set_velocity(&mut self, delta_x: f64, delta_y: f64) {
        self.delta_x = delta_x;
        self.delta_y = delta_y;
    }

    /// Interaction category
    pub fn team(&self) -> Team {
        self.team
    }

    /// Bounding radius in pixels
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Change the bounding radius; zero is rejected
    pub fn set_radius(&mut self, radius: u32) -> Result<(), SpriteError> {
        if radius == 0 {
            return Err(SpriteError::InvalidRadius(0));
        }
        self.radius = radius;
        Ok(())
    }

    /// Orientation in degrees, in `[0, 360)`
    pub fn orientation(&self) -> i32 {
        self.orientation
    }

    /// Set the orientation; any value is folded into `[0, 360)`
    pub fn set_orientation(&mut self, degrees: i32) {
        self.orientation = degrees.rem_euclid(360);
    }

    /// Spin in degrees per tick
    pub fn spin(&self) -> i32 {
        self.spin
    }

    /// Set the spin; 0 disables it
    pub fn set_spin(&mut self, spin: i32) {
        self.spin = spin;
    }

    /// Ticks left to live; 0 means immortal
    pub fn expiry(&self) -> u32 {
        self.expiry
    }

    /// Set the remaining life in ticks
    pub fn set_expiry(&mut self, expiry: u32) {
        self.expiry = expiry;
    }

    /// Render payload
    pub fn render_mode(&self) -> &RenderMode {
        &self.render
    }

    /// One tick of motion: wrap or integrate, then expire, then spin
    pub fn step(&mut self, ctx: &mut TickContext<'_>) {
        self.reposition(ctx.playfield);

        if self.expiry > 0 {
            self.expire(ctx);
        }

        if self.spin != 0 {
            self.orientation = (self.orientation + self.spin.rem_euclid(360)).rem_euclid(360);
        }
    }

    /// Exactly one of: wrap an escaped axis, or integrate the velocity
    fn reposition(&mut self, playfield: &Playfield) {
        let (x, y) = (self.center.x, self.center.y);
        let (width, height) = (playfield.width(), playfield.height());

        let moved = if x >= width {
            log::trace!("Sprite wrapped off the right edge at ({}, {})", x, y);
            Point2::new(1, y)
        } else if x < 0 {
            log::trace!("Sprite wrapped off the left edge at ({}, {})", x, y);
            Point2::new(width - 1, y)
        } else if y >= height {
            log::trace!("Sprite wrapped off the bottom edge at ({}, {})", x, y);
            Point2::new(x, 1)
        } else if y < 0 {
            log::trace!("Sprite wrapped off the top edge at ({}, {})", x, y);
            Point2::new(x, height - 1)
        } else {
            Point2::new(
                utils::truncate(f64::from(x) + self.delta_x),
                utils::truncate(f64::from(y) + self.delta_y),
            )
        };

        self.center = contain(playfield, moved);
    }

    /// Enqueue removal when the last tick of life is consumed
    fn expire(&mut self, ctx: &mut TickContext<'_>) {
        if self.expiry == 1 {
            ctx.remove_self();
        }
        self.expiry -= 1;
    }
}

/// Fold each axis back into the playfield using the same wrap targets
fn contain(playfield: &Playfield, point: Point2) -> Point2 {
    let x = if point.x >= playfield.width() {
        1
    } else if point.x < 0 {
        playfield.width() - 1
    } else {
        point.x
    };
    let y = if point.y >= playfield.height() {
        1
    } else if point.y < 0 {
        playfield.height() - 1
    } else {
        point.y
    };
    Point2::new(x, y)
}

impl Movable for Sprite {
    fn advance(&mut self, ctx: &mut TickContext<'_>) {
        self.step(ctx);
    }

    /// Vector sprites draw their outline; raster sprites their first frame
    fn draw(&mut self, surface: &mut dyn Surface) {
        match &self.render {
            RenderMode::Vector(_) => self.render_vector(surface),
            RenderMode::Raster(frames) => self.render_raster(surface, frames.first()),
        }
    }

    fn center(&self) -> Point2 {
        self.center
    }

    fn radius(&self) -> u32 {
        self.radius
    }

    fn team(&self) -> Team {
        self.team
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::commands::{CommandQueue, GameOp};
    use crate::foundation::random::shared_rng;
    use crate::world::SpriteKey;

    fn triangle() -> RenderMode {
        RenderMode::vector(
            vec![Point2::new(0, 10), Point2::new(8, -6), Point2::new(-8, -6)],
            Color::WHITE,
        )
    }

    fn sprite_at(x: i32, y: i32) -> Sprite {
        Sprite::at(Point2::new(x, y), Team::Foe, 10, triangle()).unwrap()
    }

    fn advance(sprite: &mut Sprite, playfield: &Playfield, commands: &mut CommandQueue) {
        let mut ctx = TickContext::new(playfield, commands, SpriteKey::default());
        sprite.advance(&mut ctx);
    }

    fn removals(commands: &CommandQueue) -> usize {
        commands.iter().filter(|op| matches!(op, GameOp::Remove(_))).count()
    }

    #[test]
    fn test_new_places_sprite_inside_playfield() {
        let playfield = Playfield::new(50, 30).unwrap();
        let mut rng = shared_rng(Some(5));
        for _ in 0..200 {
            let sprite = Sprite::new(&playfield, &mut rng, Team::Floater, 4, triangle()).unwrap();
            assert!(playfield.contains(sprite.center().x, sprite.center().y));
        }
    }

    #[test]
    fn test_zero_radius_rejected() {
        let result = Sprite::at(Point2::new(1, 1), Team::Foe, 0, triangle());
        assert_eq!(result.unwrap_err(), SpriteError::InvalidRadius(0));

        let mut sprite = sprite_at(1, 1);
        assert!(sprite.set_radius(0).is_err());
        assert_eq!(sprite.radius(), 10);
    }

    #[test]
    fn test_empty_raster_rejected() {
        let result = Sprite::at(Point2::new(1, 1), Team::Debris, 3, RenderMode::raster(RasterMap::new()));
        assert_eq!(result.unwrap_err(), SpriteError::NoFrames);
    }

    #[test]
    fn test_right_edge_wrap() {
        let playfield = Playfield::new(100, 80).unwrap();
        let mut commands = CommandQueue::new();
        let mut sprite = sprite_at(105, 40);
        sprite.set_velocity(3.0, 3.0);

        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(sprite.center(), Point2::new(1, 40));
    }

    #[test]
    fn test_center_exactly_on_far_edge_wraps() {
        let playfield = Playfield::new(100, 80).unwrap();
        let mut commands = CommandQueue::new();

        let mut right = sprite_at(100, 40);
        right.set_velocity(-5.0, 0.0);
        advance(&mut right, &playfield, &mut commands);
        assert_eq!(right.center(), Point2::new(1, 40));

        let mut bottom = sprite_at(30, 80);
        bottom.set_velocity(0.0, -5.0);
        advance(&mut bottom, &playfield, &mut commands);
        assert_eq!(bottom.center(), Point2::new(30, 1));

        let mut inside = sprite_at(99, 79);
        advance(&mut inside, &playfield, &mut commands);
        assert_eq!(inside.center(), Point2::new(99, 79));
    }

    #[test]
    fn test_smallest_playfield_keeps_sprites_inside() {
        let playfield = Playfield::new(Playfield::MIN_SIDE, Playfield::MIN_SIDE).unwrap();
        let mut commands = CommandQueue::new();
        let mut rng = shared_rng(Some(2));

        let mut sprite = Sprite::new(&playfield, &mut rng, Team::Foe, 1, triangle()).unwrap();
        sprite.set_velocity(1.0, 1.0);
        for _ in 0..20 {
            advance(&mut sprite, &playfield, &mut commands);
            let c = sprite.center();
            assert!(playfield.contains(c.x, c.y), "escaped to ({}, {})", c.x, c.y);
        }
    }

    #[test]
    fn test_other_edge_wraps() {
        let playfield = Playfield::new(100, 80).unwrap();
        let mut commands = CommandQueue::new();

        let mut left = sprite_at(-3, 20);
        advance(&mut left, &playfield, &mut commands);
        assert_eq!(left.center(), Point2::new(99, 20));

        let mut bottom = sprite_at(20, 85);
        advance(&mut bottom, &playfield, &mut commands);
        assert_eq!(bottom.center(), Point2::new(20, 1));

        let mut top = sprite_at(20, -1);
        advance(&mut top, &playfield, &mut commands);
        assert_eq!(top.center(), Point2::new(20, 79));
    }

    #[test]
    fn test_x_wrap_takes_precedence_over_y() {
        let playfield = Playfield::new(100, 80).unwrap();
        let mut commands = CommandQueue::new();
        let mut sprite = sprite_at(150, -20);
        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(sprite.center().x, 1);
        assert!(playfield.contains(sprite.center().x, sprite.center().y));
    }

    #[test]
    fn test_integration_truncates_toward_zero() {
        let playfield = Playfield::new(100, 80).unwrap();
        let mut commands = CommandQueue::new();
        let mut sprite = sprite_at(10, 10);
        sprite.set_velocity(2.9, -2.9);
        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(sprite.center(), Point2::new(12, 7));

        let mut creeping = sprite_at(0, 5);
        creeping.set_velocity(-0.5, 0.0);
        advance(&mut creeping, &playfield, &mut commands);
        assert_eq!(creeping.center(), Point2::new(0, 5));
    }

    #[test]
    fn test_center_stays_in_bounds_every_tick() {
        let playfield = Playfield::new(64, 48).unwrap();
        let mut commands = CommandQueue::new();
        let mut rng = shared_rng(Some(77));

        for _ in 0..50 {
            let mut sprite = Sprite::new(&playfield, &mut rng, Team::Foe, 5, triangle()).unwrap();
            let dx = f64::from(rng.gen_range(-400..400)) / 10.0;
            let dy = f64::from(rng.gen_range(-400..400)) / 10.0;
            sprite.set_velocity(dx, dy);
            for _ in 0..300 {
                advance(&mut sprite, &playfield, &mut commands);
                let c = sprite.center();
                assert!(playfield.contains(c.x, c.y), "escaped to ({}, {})", c.x, c.y);
            }
        }
    }

    #[test]
    fn test_expiry_one_enqueues_single_removal() {
        let playfield = Playfield::default();
        let mut commands = CommandQueue::new();
        let mut sprite = sprite_at(10, 10);
        sprite.set_expiry(1);

        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(removals(&commands), 1);
        assert_eq!(sprite.expiry(), 0);

        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(removals(&commands), 1);
        assert_eq!(sprite.expiry(), 0);
    }

    #[test]
    fn test_expiry_counts_down_before_removal() {
        let playfield = Playfield::default();
        let mut commands = CommandQueue::new();
        let mut sprite = sprite_at(10, 10);
        sprite.set_expiry(3);

        advance(&mut sprite, &playfield, &mut commands);
        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(sprite.expiry(), 1);
        assert!(commands.is_empty());

        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(removals(&commands), 1);
    }

    #[test]
    fn test_immortal_never_enqueues() {
        let playfield = Playfield::default();
        let mut commands = CommandQueue::new();
        let mut sprite = sprite_at(10, 10);
        for _ in 0..100 {
            advance(&mut sprite, &playfield, &mut commands);
        }
        assert!(commands.is_empty());
    }

    #[test]
    fn test_spin_accumulates_and_wraps_at_360() {
        let playfield = Playfield::default();
        let mut commands = CommandQueue::new();
        let mut sprite = sprite_at(10, 10);
        sprite.set_spin(100);
        for _ in 0..4 {
            advance(&mut sprite, &playfield, &mut commands);
        }
        assert_eq!(sprite.orientation(), 40);

        sprite.set_spin(-50);
        advance(&mut sprite, &playfield, &mut commands);
        assert_eq!(sprite.orientation(), 350);
    }

    #[test]
    fn test_static_raster_sprite_draws_first_frame() {
        let frames = RasterMap::from_images([ImageData::solid_color(4, 4, [1, 1, 1, 255])]);
        let mut sprite = Sprite::at(Point2::new(5, 5), Team::Floater, 2, RenderMode::raster(frames)).unwrap();
        let mut surface = crate::render::RecordingSurface::new();
        sprite.draw(&mut surface);
        assert_eq!(surface.image_transforms().count(), 1);
    }
}
