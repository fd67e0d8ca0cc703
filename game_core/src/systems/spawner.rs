use crate::{create_pipe, Config, GameRng, Pipe, Spawner, Time};
use hecs::{Entity, World};

/// Spawn a pipe if the timers allow it and the newest pipe has moved far enough
pub fn spawn_pipes(
    world: &mut World,
    time: &Time,
    spawner: &mut Spawner,
    config: &Config,
    rng: &mut GameRng,
) -> Option<Entity> {
    if !spawner.is_due(time.now, config) {
        return None;
    }

    let spawn_line = config.canvas_width - config.pipe_min_spacing;
    let too_close = world
        .query::<&Pipe>()
        .iter()
        .any(|(_e, pipe)| pipe.x > spawn_line);
    if too_close {
        return None;
    }

    let pipe = Pipe::random(spawner.take_seq(), config, rng);
    spawner.record_spawn(time.now);
    Some(create_pipe(world, pipe))
}

/// Place the single pipe shown while waiting, just past the right edge
pub fn seed_pipe(
    world: &mut World,
    spawner: &mut Spawner,
    config: &Config,
    rng: &mut GameRng,
) -> Entity {
    let mut pipe = Pipe::random(spawner.take_seq(), config, rng);
    pipe.x = config.canvas_width + config.pipe_seed_offset;
    create_pipe(world, pipe)
}
