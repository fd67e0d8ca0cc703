use crate::{bird_state, Config, Events, Pipe, Score, SoundCue};
use hecs::World;

/// Award a point for every pipe whose trailing edge just passed the bird
pub fn check_scoring(world: &mut World, score: &mut Score, events: &mut Events, config: &Config) {
    let bird_x = match bird_state(world) {
        Some(bird) => bird.pos.x,
        None => return,
    };

    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        if pipe.check_score(bird_x, config) {
            score.increment();
            events.pipes_scored += 1;
            events.play(SoundCue::Score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_bird, create_pipe};

    fn setup_world() -> (World, Config, Score, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_bird(&mut world, &config);
        (world, config, Score::new(), Events::new())
    }

    #[test]
    fn test_scores_once_when_pipe_passes_bird() {
        let (mut world, config, mut score, mut events) = setup_world();
        let mut pipe = Pipe::with_gap(0, 100.0, &config);
        pipe.x = 139.0;
        create_pipe(&mut world, pipe);

        check_scoring(&mut world, &mut score, &mut events, &config);
        check_scoring(&mut world, &mut score, &mut events, &config);

        assert_eq!(score.value, 1);
        assert_eq!(events.pipes_scored, 1);
        assert_eq!(events.cues().collect::<Vec<_>>(), vec![SoundCue::Score]);
    }

    #[test]
    fn test_no_score_while_pipe_overlaps_bird() {
        let (mut world, config, mut score, mut events) = setup_world();
        let mut pipe = Pipe::with_gap(0, 100.0, &config);
        pipe.x = 170.0;
        create_pipe(&mut world, pipe);

        check_scoring(&mut world, &mut score, &mut events, &config);

        assert_eq!(score.value, 0);
        assert!(events.audio.is_empty());
    }

    #[test]
    fn test_multiple_pipes_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        for (seq, x) in [(0, -50.0), (1, 100.0), (2, 300.0)] {
            let mut pipe = Pipe::with_gap(seq, 100.0, &config);
            pipe.x = x;
            create_pipe(&mut world, pipe);
        }

        check_scoring(&mut world, &mut score, &mut events, &config);

        assert_eq!(score.value, 2);
    }

    #[test]
    fn test_no_bird_no_score() {
        let mut world = World::new();
        let config = Config::new();
        let mut score = Score::new();
        let mut events = Events::new();
        let mut pipe = Pipe::with_gap(0, 100.0, &config);
        pipe.x = 0.0;
        create_pipe(&mut world, pipe);

        check_scoring(&mut world, &mut score, &mut events, &config);

        assert_eq!(score.value, 0);
    }
}
