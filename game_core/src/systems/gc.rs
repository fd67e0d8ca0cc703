use hecs::World;

use crate::{Config, Events, Pipe};

/// Garbage collection: despawn pipes that have scrolled past the left edge
pub fn prune_pipes(world: &mut World, config: &Config, events: &mut Events) -> usize {
    let to_remove: Vec<_> = world
        .query::<&Pipe>()
        .iter()
        .filter(|(_entity, pipe)| pipe.is_off_screen(config))
        .map(|(entity, _pipe)| entity)
        .collect();

    for entity in &to_remove {
        let _ = world.despawn(*entity);
    }

    events.pipes_pruned += to_remove.len() as u32;
    to_remove.len()
}
