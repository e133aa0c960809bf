//! Headless asteroids demo
//!
//! Spawns a field of rocks, destroys one every few ticks and lets the
//! explosion clouds play out, drawing into a recording surface.

use std::path::PathBuf;

use asteroids::{DebrisFrames, GameConfig, GameError, Rock};
use sprite_engine::foundation::{logging, random};
use sprite_engine::render::RecordingSurface;
use sprite_engine::sprite::Team;
use sprite_engine::{CommandQueue, World};

fn main() -> Result<(), GameError> {
    logging::init();
    log::info!("Starting asteroids demo");

    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("asteroids.toml"), PathBuf::from);
    let config = GameConfig::load_or_default(&config_path)?;
    let playfield = config.engine.playfield;

    let mut rng = random::shared_rng(config.engine.rng_seed);
    let debris = DebrisFrames::load(&config.debris);

    let mut world = World::new();
    let mut commands = CommandQueue::new();
    for _ in 0..config.demo.rock_count {
        let rock = Rock::new(&playfield, &mut rng, debris.clone())?;
        world.insert(Box::new(rock), &mut commands);
    }
    log::info!("Spawned {} rocks on a {}x{} playfield", world.len(), playfield.width(), playfield.height());

    let mut surface = RecordingSurface::new();
    let mut applied = 0;
    for tick in 1..=config.demo.ticks {
        surface.clear();
        world.tick(&playfield, &mut commands, &mut surface);

        if tick % config.demo.kill_interval == 0 {
            if let Some(&key) = world.keys_on_team(Team::Foe).first() {
                log::debug!("Tick {}: destroying rock {:?}", tick, key);
                world.kill(key, &mut commands);
            }
        }

        applied += world.apply_commands(&mut commands);
        log::trace!("Tick {}: {} draw calls, {} live", tick, surface.calls().len(), world.len());
    }

    log::info!(
        "Finished {} ticks: {} commands applied, {} rocks and {} clouds left",
        config.demo.ticks,
        applied,
        world.keys_on_team(Team::Foe).len(),
        world.keys_on_team(Team::Debris).len()
    );
    Ok(())
}
