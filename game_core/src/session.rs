//! One game instance: world, clock, score, pipes and the phase machine

use crate::systems::seed_pipe;
use crate::{
    bird_state, clear_pipes, create_bird, pipes_in_order, step, Bird, Config, Crash, Events,
    GameAction, GameFsm, GameRng, InputEvent, InputKind, Phase, Pipe, Score, SoundCue, Spawner,
    Time,
};
use hecs::{Entity, World};

/// What an input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Started,
    Jumped,
    Restarted,
    /// Restart attempted inside the cooldown
    Ignored,
    MuteToggled,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: u32,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
}

pub struct GameSession {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub spawner: Spawner,
    pub rng: GameRng,
    bird: Entity,
    fsm: GameFsm,
    game_over_at: Option<f64>,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let bird = create_bird(&mut world, &config);

        let mut session = Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            spawner: Spawner::new(),
            rng: GameRng::new(seed),
            bird,
            fsm: GameFsm::new(),
            game_over_at: None,
        };
        session.reset_round();
        session
    }

    pub fn phase(&self) -> Phase {
        self.fsm.phase()
    }

    pub fn score(&self) -> u32 {
        self.score.value
    }

    pub fn bird(&self) -> Bird {
        bird_state(&self.world).unwrap_or_else(|| Bird::new(&self.config))
    }

    pub fn pipes(&self) -> Vec<Pipe> {
        pipes_in_order(&self.world)
    }

    pub fn game_over_at(&self) -> Option<f64> {
        self.game_over_at
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            score: self.score(),
            bird: self.bird(),
            pipes: self.pipes(),
        }
    }

    /// Hand everything queued since the last call to the host
    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    /// Single entry point for player input
    pub fn handle_input(&mut self, input: InputEvent) -> InputOutcome {
        match input.kind {
            InputKind::ToggleMute => {
                self.events.toggle_mute();
                InputOutcome::MuteToggled
            }
            InputKind::Jump => match self.phase() {
                Phase::Ready => {
                    self.start(input.timestamp);
                    InputOutcome::Started
                }
                Phase::Playing => {
                    self.jump();
                    InputOutcome::Jumped
                }
                Phase::GameOver => {
                    if self.cooldown_elapsed(input.timestamp) {
                        self.restart();
                        InputOutcome::Restarted
                    } else {
                        InputOutcome::Ignored
                    }
                }
            },
        }
    }

    /// Advance one frame; called by the host's frame loop
    pub fn run_frame(&mut self, timestamp: f64) -> Option<Crash> {
        self.time.advance(timestamp);
        let phase = self.phase();

        let crash = step(
            &mut self.world,
            &self.time,
            phase,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.spawner,
            &mut self.rng,
        );

        if let Some(crash) = crash {
            self.end_round(crash);
        }
        crash
    }

    fn start(&mut self, now: f64) {
        if !self.fsm.transition(GameAction::Start).success {
            return;
        }
        clear_pipes(&mut self.world);
        self.spawner.begin(now);
        self.events.resume_audio();
        self.jump();
    }

    fn jump(&mut self) {
        if let Ok(mut bird) = self.world.get::<&mut Bird>(self.bird) {
            bird.jump(&self.config);
        }
        self.events.play(SoundCue::Jump);
    }

    fn end_round(&mut self, crash: Crash) {
        if !self.fsm.transition(GameAction::Crash).success {
            return;
        }
        self.game_over_at = Some(self.time.now);
        self.events.play(SoundCue::GameOver);
        log::info!("game over ({:?}) with score {}", crash, self.score.value);
    }

    fn cooldown_elapsed(&self, now: f64) -> bool {
        match self.game_over_at {
            Some(at) => now > at + self.config.restart_cooldown_ms,
            None => true,
        }
    }

    fn restart(&mut self) {
        if !self.fsm.transition(GameAction::Restart).success {
            return;
        }
        self.reset_round();
        self.events.resume_audio();
    }

    /// Fresh Ready round: score, bird, spawner and a single seeded pipe
    fn reset_round(&mut self) {
        self.score.reset();
        self.game_over_at = None;
        if let Ok(mut bird) = self.world.get::<&mut Bird>(self.bird) {
            bird.reset(&self.config);
        }
        clear_pipes(&mut self.world);
        self.spawner.reset();
        seed_pipe(&mut self.world, &mut self.spawner, &self.config, &mut self.rng);
    }
}
