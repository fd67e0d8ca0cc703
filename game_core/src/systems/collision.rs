use crate::{bird_state, Config, Pipe};
use hecs::World;

/// Check the bird against both halves of every pipe
pub fn check_collisions(world: &World, config: &Config) -> bool {
    let bird = match bird_state(world) {
        Some(bird) => bird,
        None => return false,
    };

    let mut pipes = world.query::<&Pipe>();
    let hit = pipes.iter().any(|(_e, pipe)| {
        bird.collides_with(&pipe.bottom_rect(config), config)
            || bird.collides_with(&pipe.top_rect(config), config)
    });
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_bird, create_pipe, Bird};
    use glam::Vec2;

    fn setup_world(bird_pos: Vec2) -> (World, Config) {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_bird(&mut world, &config);
        world.get::<&mut Bird>(entity).unwrap().pos = bird_pos;
        (world, config)
    }

    fn pipe_at(x: f32, gap_start: f32, config: &Config) -> Pipe {
        let mut pipe = Pipe::with_gap(0, gap_start, config);
        pipe.x = x;
        pipe
    }

    #[test]
    fn test_bird_in_gap_is_safe() {
        let (mut world, config) = setup_world(Vec2::new(200.0, 300.0));
        // gap spans y = 200..370
        create_pipe(&mut world, pipe_at(180.0, 200.0, &config));
        assert!(!check_collisions(&world, &config));
    }

    #[test]
    fn test_hits_top_segment() {
        let (mut world, config) = setup_world(Vec2::new(200.0, 220.0));
        // top segment ends at y = 200, padded reach is 25
        create_pipe(&mut world, pipe_at(180.0, 200.0, &config));
        assert!(check_collisions(&world, &config));
    }

    #[test]
    fn test_hits_bottom_segment() {
        let (mut world, config) = setup_world(Vec2::new(200.0, 350.0));
        // bottom segment starts at y = 370
        create_pipe(&mut world, pipe_at(180.0, 200.0, &config));
        assert!(check_collisions(&world, &config));
    }

    #[test]
    fn test_pipe_ahead_of_bird_is_safe() {
        let (mut world, config) = setup_world(Vec2::new(200.0, 100.0));
        create_pipe(&mut world, pipe_at(221.0, 200.0, &config));
        assert!(!check_collisions(&world, &config));
    }

    #[test]
    fn test_side_graze_within_radius_hits() {
        let (mut world, config) = setup_world(Vec2::new(200.0, 100.0));
        create_pipe(&mut world, pipe_at(219.0, 200.0, &config));
        assert!(check_collisions(&world, &config));
    }
}
