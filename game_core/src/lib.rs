pub mod audio;
pub mod color;
pub mod components;
pub mod config;
pub mod cursor;
pub mod fsm;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use audio::*;
pub use color::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of the Flappy simulation
///
/// Returns the crash that ended the round this frame, if any. The caller owns
/// the phase and applies the transition.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    phase: Phase,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    spawner: &mut Spawner,
    rng: &mut GameRng,
) -> Option<Crash> {
    let playing = phase == Phase::Playing;

    // 1. Spawn new pipes
    if playing {
        spawn_pipes(world, time, spawner, config, rng);
    }

    // 2. Scroll pipes
    if playing {
        move_pipes(world, config);
    }

    // 3. Drop pipes that left the canvas
    prune_pipes(world, config, events);

    // 4. Score and collide against what is left
    let mut crash = None;
    if playing {
        check_scoring(world, score, events, config);
        if check_collisions(world, config) {
            crash = Some(Crash::PipeCollision);
        }
    }

    // 5. Move the bird unless the round just ended
    if crash.is_none() && move_bird(world, phase, config) {
        crash = Some(Crash::OutOfBounds);
    }

    crash
}

/// Helper to create the bird entity
pub fn create_bird(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Bird::new(config),))
}

/// Helper to create a pipe entity
pub fn create_pipe(world: &mut World, pipe: Pipe) -> hecs::Entity {
    world.spawn((pipe,))
}

/// Copy of the bird, if there is one
pub fn bird_state(world: &World) -> Option<Bird> {
    let mut bird_query = world.query::<&Bird>();
    let bird = bird_query.iter().next().map(|(_e, bird)| *bird);
    bird
}

/// All pipes ordered by creation
pub fn pipes_in_order(world: &World) -> Vec<Pipe> {
    let mut pipes: Vec<Pipe> = world
        .query::<&Pipe>()
        .iter()
        .map(|(_e, pipe)| *pipe)
        .collect();
    pipes.sort_by_key(|pipe| pipe.seq);
    pipes
}

pub fn pipe_count(world: &World) -> usize {
    world.query::<&Pipe>().iter().count()
}

/// Despawn every pipe, leaving the bird alone
pub fn clear_pipes(world: &mut World) {
    let pipes: Vec<_> = world
        .query::<&Pipe>()
        .iter()
        .map(|(entity, _pipe)| entity)
        .collect();
    for entity in pipes {
        let _ = world.despawn(entity);
    }
}
