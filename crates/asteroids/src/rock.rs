//! Drifting rocks

use rand::Rng;
use sprite_engine::config::Playfield;
use sprite_engine::foundation::math::Point2;
use sprite_engine::foundation::random::{some_pos_neg_value, some_pos_value};
use sprite_engine::render::{Color, Surface};
use sprite_engine::sprite::{Movable, RenderMode, Sprite, SpriteError, Team, TickContext};
use sprite_engine::CommandQueue;

use crate::debris::{DebrisFrames, WhiteCloudDebris};

/// Smallest rock radius in pixels
const MIN_RADIUS: i32 = 20;
/// Random extra radius on top of `MIN_RADIUS`
const RADIUS_SPREAD: i32 = 20;
/// Speed bound per axis, in pixels per tick
const SPEED_SEED: i32 = 5;
/// Spin bound, in degrees per tick
const SPIN_SEED: i32 = 7;

/// Outline of a lumpy rock, y up
fn outline() -> Vec<Point2> {
    vec![
        Point2::new(0, 10),
        Point2::new(6, 8),
        Point2::new(10, 2),
        Point2::new(8, -6),
        Point2::new(2, -10),
        Point2::new(-5, -8),
        Point2::new(-10, -3),
        Point2::new(-8, 6),
    ]
}

/// A rock tumbling across the playfield
///
/// Explodes into a [`WhiteCloudDebris`] when destroyed.
#[derive(Debug, Clone)]
pub struct Rock {
    sprite: Sprite,
    debris: DebrisFrames,
}

impl Rock {
    /// Spawn a rock at a random point with a random drift and spin
    pub fn new<R: Rng + ?Sized>(
        playfield: &Playfield,
        rng: &mut R,
        debris: DebrisFrames,
    ) -> Result<Self, SpriteError> {
        let radius = MIN_RADIUS + some_pos_value(rng, RADIUS_SPREAD);
        let render = RenderMode::vector(outline(), Color::GRAY);
        let mut sprite = Sprite::new(playfield, rng, Team::Foe, radius.unsigned_abs(), render)?;

        let delta_x = some_pos_neg_value(rng, SPEED_SEED);
        let delta_y = some_pos_neg_value(rng, SPEED_SEED);
        sprite.set_velocity(f64::from(delta_x), f64::from(delta_y));
        sprite.set_spin(some_pos_neg_value(rng, SPIN_SEED));

        Ok(Self { sprite, debris })
    }

    /// Wrap an already placed sprite
    pub fn from_sprite(sprite: Sprite, debris: DebrisFrames) -> Self {
        Self { sprite, debris }
    }

    /// Underlying sprite state
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Movable for Rock {
    fn advance(&mut self, ctx: &mut TickContext<'_>) {
        self.sprite.step(ctx);
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.sprite.render_vector(surface);
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

    fn dead(&mut self, commands: &mut CommandQueue) {
        match WhiteCloudDebris::new(&self.sprite, &self.debris) {
            Ok(cloud) => commands.enqueue_add(Box::new(cloud)),
            Err(e) => log::warn!("Rock at {:?} left no debris: {}", self.sprite.center(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprite_engine::assets::{ImageData, RasterMap};
    use sprite_engine::foundation::random::shared_rng;
    use sprite_engine::render::RecordingSurface;
    use sprite_engine::sprite::VectorShape;
    use sprite_engine::World;

    fn frames() -> DebrisFrames {
        DebrisFrames::from_map(RasterMap::from_images(
            (0..9).map(|_| ImageData::solid_color(8, 8, [255; 4])),
        ))
    }

    #[test]
    fn test_random_rocks_stay_in_range() {
        let playfield = Playfield::default();
        let mut rng = shared_rng(Some(11));
        for _ in 0..50 {
            let rock = Rock::new(&playfield, &mut rng, frames()).unwrap();
            let sprite = rock.sprite();
            assert!((20..40).contains(&sprite.radius()));
            assert!(playfield.contains(sprite.center().x, sprite.center().y));
            assert!(sprite.delta_x().abs() < 5.0);
            assert!(sprite.delta_y().abs() < 5.0);
            assert!(sprite.spin().abs() < 7);
            assert_eq!(sprite.team(), Team::Foe);
        }
    }

    #[test]
    fn test_same_seed_same_rock() {
        let playfield = Playfield::default();
        let a = Rock::new(&playfield, &mut shared_rng(Some(3)), frames()).unwrap();
        let b = Rock::new(&playfield, &mut shared_rng(Some(3)), frames()).unwrap();
        assert_eq!(a.sprite().center(), b.sprite().center());
        assert_eq!(a.sprite().spin(), b.sprite().spin());
    }

    #[test]
    fn test_destroyed_rock_becomes_debris() {
        let render = RenderMode::vector(outline(), Color::GRAY);
        let mut sprite = Sprite::at(Point2::new(40, 50), Team::Foe, 30, render).unwrap();
        sprite.set_velocity(2.0, 0.0);
        let mut world = World::new();
        let mut commands = CommandQueue::new();
        let key = world.insert(Box::new(Rock::from_sprite(sprite, frames())), &mut commands);

        assert!(world.kill(key, &mut commands));
        world.apply_commands(&mut commands);

        assert!(!world.contains(key));
        let clouds = world.keys_on_team(Team::Debris);
        assert_eq!(clouds.len(), 1);
        let cloud = world.get(clouds[0]).unwrap();
        assert_eq!(cloud.center(), Point2::new(40, 50));
        assert_eq!(cloud.radius(), 39);
    }

    #[test]
    fn test_rock_shape_is_nameable_downstream() {
        let rock = Rock::new(&Playfield::default(), &mut shared_rng(Some(4)), frames()).unwrap();
        let RenderMode::Vector(shape) = rock.sprite().render_mode() else {
            panic!("rocks are vector sprites");
        };
        let shape: &VectorShape = shape;
        assert_eq!(shape.cartesians(), outline().as_slice());
        assert_eq!(shape.color(), Color::GRAY);
    }

    #[test]
    fn test_rock_draws_its_outline() {
        let mut rock = Rock::new(&Playfield::default(), &mut shared_rng(Some(9)), frames()).unwrap();
        let mut surface = RecordingSurface::new();
        rock.draw(&mut surface);
        let polygons: Vec<_> = surface.polygons().collect();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), outline().len());
    }
}
