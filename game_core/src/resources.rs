use crate::audio::{AudioCommand, SoundCue};
use crate::Config;

/// Time resource for tracking frame timestamps
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f64,   // Latest frame timestamp in milliseconds
    pub frame: u64, // Frames simulated so far
}

impl Time {
    pub fn new(now: f64) -> Self {
        Self { now, frame: 0 }
    }

    /// Move to the next frame; timestamps never run backwards
    pub fn advance(&mut self, timestamp: f64) {
        if timestamp < self.now {
            log::warn!(
                "clock went backwards ({timestamp} < {}), holding previous time",
                self.now
            );
        } else {
            self.now = timestamp;
        }
        self.frame += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Things that happened since the host last drained them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub audio: Vec<AudioCommand>,
    pub pipes_scored: u32,
    pub pipes_pruned: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.audio.clear();
        self.pipes_scored = 0;
        self.pipes_pruned = 0;
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.audio.push(AudioCommand::Play(cue));
    }

    pub fn resume_audio(&mut self) {
        self.audio.push(AudioCommand::Resume);
    }

    pub fn toggle_mute(&mut self) {
        self.audio.push(AudioCommand::ToggleMute);
    }

    /// Sound cues queued so far, in order
    pub fn cues(&self) -> impl Iterator<Item = SoundCue> + '_ {
        self.audio.iter().filter_map(|cmd| match cmd {
            AudioCommand::Play(cue) => Some(*cue),
            _ => None,
        })
    }
}

/// Pipe spawn bookkeeping
#[derive(Debug, Clone, Copy, Default)]
pub struct Spawner {
    pub started_at: f64,          // When Playing began
    pub last_spawn: Option<f64>,  // None until the first timed spawn
    pub next_seq: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock for a new round of play
    pub fn begin(&mut self, now: f64) {
        self.started_at = now;
        self.last_spawn = None;
    }

    pub fn reset(&mut self) {
        self.started_at = 0.0;
        self.last_spawn = None;
    }

    /// Delay and interval gates; spacing is checked against the world
    pub fn is_due(&self, now: f64, config: &Config) -> bool {
        if now <= self.started_at + config.initial_delay_ms {
            return false;
        }
        match self.last_spawn {
            None => true,
            Some(last) => now >= last + config.spawn_interval_ms,
        }
    }

    pub fn record_spawn(&mut self, now: f64) {
        self.last_spawn = Some(now);
    }

    pub fn take_seq(&mut self) -> u32 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Jump,
    ToggleMute,
}

/// Timestamped input from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub kind: InputKind,
    pub timestamp: f64, // Milliseconds, same clock as frames
}

impl InputEvent {
    pub fn jump(timestamp: f64) -> Self {
        Self {
            kind: InputKind::Jump,
            timestamp,
        }
    }

    pub fn toggle_mute(timestamp: f64) -> Self {
        Self {
            kind: InputKind::ToggleMute,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_advance() {
        let mut time = Time::new(0.0);
        time.advance(16.7);
        assert_eq!(time.now, 16.7);
        assert_eq!(time.frame, 1);
    }

    #[test]
    fn test_time_never_runs_backwards() {
        let mut time = Time::new(100.0);
        time.advance(50.0);
        assert_eq!(time.now, 100.0);
        assert_eq!(time.frame, 1);
    }

    #[test]
    fn test_score_increment_and_reset() {
        let mut score = Score::new();
        assert_eq!(score.value, 0);
        score.increment();
        score.increment();
        assert_eq!(score.value, 2);
        score.reset();
        assert_eq!(score.value, 0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.play(SoundCue::Score);
        events.resume_audio();
        events.pipes_scored = 2;
        events.pipes_pruned = 1;

        events.clear();

        assert!(events.audio.is_empty());
        assert_eq!(events.pipes_scored, 0);
        assert_eq!(events.pipes_pruned, 0);
    }

    #[test]
    fn test_events_cues_skip_control_commands() {
        let mut events = Events::new();
        events.resume_audio();
        events.play(SoundCue::Jump);
        events.toggle_mute();
        events.play(SoundCue::Score);
        let cues: Vec<_> = events.cues().collect();
        assert_eq!(cues, vec![SoundCue::Jump, SoundCue::Score]);
    }

    #[test]
    fn test_spawner_waits_for_initial_delay() {
        let config = Config::new();
        let mut spawner = Spawner::new();
        spawner.begin(1000.0);
        assert!(!spawner.is_due(1000.0, &config));
        assert!(!spawner.is_due(3000.0, &config)); // exactly the delay
        assert!(spawner.is_due(3000.1, &config));
    }

    #[test]
    fn test_spawner_interval() {
        let config = Config::new();
        let mut spawner = Spawner::new();
        spawner.begin(0.0);
        spawner.record_spawn(2100.0);
        assert!(!spawner.is_due(3899.0, &config));
        assert!(spawner.is_due(3900.0, &config));
    }

    #[test]
    fn test_spawner_boundaries_with_fractional_start() {
        let config = Config::new();
        let mut spawner = Spawner::new();
        let start = 1466.67;
        spawner.begin(start);

        let delay_end = start + config.initial_delay_ms;
        assert!(!spawner.is_due(delay_end, &config));
        assert!(spawner.is_due(delay_end + 0.01, &config));

        let last = delay_end + 16.67;
        spawner.record_spawn(last);
        assert!(!spawner.is_due(last + config.spawn_interval_ms - 0.01, &config));
        assert!(spawner.is_due(last + config.spawn_interval_ms, &config));
    }

    #[test]
    fn test_spawner_seq_is_monotonic() {
        let mut spawner = Spawner::new();
        assert_eq!(spawner.take_seq(), 0);
        assert_eq!(spawner.take_seq(), 1);
        spawner.reset();
        assert_eq!(spawner.take_seq(), 2);
    }
}
