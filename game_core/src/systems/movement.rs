use crate::{Bird, Config, Phase, Pipe};
use hecs::World;

/// Scroll every pipe left by one frame
pub fn move_pipes(world: &mut World, config: &Config) {
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        pipe.advance(config);
    }
}

/// Update the bird for the current phase
///
/// Returns true if the bird left the canvas while playing.
pub fn move_bird(world: &mut World, phase: Phase, config: &Config) -> bool {
    let mut out_of_bounds = false;
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        match phase {
            Phase::Ready => bird.hover(config),
            Phase::Playing => {
                bird.fall(config);
                out_of_bounds |= bird.is_out_of_bounds(config);
            }
            Phase::GameOver => {}
        }
    }
    out_of_bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bird_state, create_bird, create_pipe, hover_y};

    #[test]
    fn test_pipes_scroll_left() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_pipe(&mut world, Pipe::with_gap(0, 100.0, &config));

        move_pipes(&mut world, &config);
        move_pipes(&mut world, &config);

        assert_eq!(world.get::<&Pipe>(entity).unwrap().x, 396.0);
    }

    #[test]
    fn test_ready_bird_hovers_without_gravity() {
        let mut world = World::new();
        let config = Config::new();
        create_bird(&mut world, &config);

        for _ in 0..200 {
            assert!(!move_bird(&mut world, Phase::Ready, &config));
        }

        let bird = bird_state(&world).unwrap();
        assert_eq!(bird.vel, 0.0);
        assert_eq!(bird.pos.y, hover_y(bird.hover_time, &config));
    }

    #[test]
    fn test_playing_bird_falls_out_of_bounds() {
        let mut world = World::new();
        let config = Config::new();
        create_bird(&mut world, &config);

        let mut frames = 0;
        while !move_bird(&mut world, Phase::Playing, &config) {
            frames += 1;
            assert!(frames < 1000, "bird never left the canvas");
        }

        let bird = bird_state(&world).unwrap();
        assert!(bird.pos.y + config.bird_radius > config.canvas_height);
    }

    #[test]
    fn test_game_over_freezes_bird() {
        let mut world = World::new();
        let config = Config::new();
        create_bird(&mut world, &config);
        let before = bird_state(&world).unwrap();

        move_bird(&mut world, Phase::GameOver, &config);

        assert_eq!(bird_state(&world).unwrap(), before);
    }
}
