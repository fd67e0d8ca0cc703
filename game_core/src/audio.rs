//! Audio command model
//!
//! The simulation never touches an audio device. It queues `AudioCommand`s in
//! `Events` and the host replays them into whatever `AudioSink` it owns.

/// Named one-shot sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Score,
    GameOver,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Jump, SoundCue::Score, SoundCue::GameOver];

    /// Name the host registers the decoded buffer under
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Jump => "jump",
            SoundCue::Score => "score",
            SoundCue::GameOver => "gameOver",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cue| cue.name() == name)
    }

    /// Playback gain
    pub fn volume(self) -> f32 {
        match self {
            SoundCue::Jump => 0.4,
            SoundCue::Score => 0.3,
            SoundCue::GameOver => 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play(SoundCue),
    Resume,
    ToggleMute,
}

/// Anything that can make the game's noises
///
/// Implementations swallow their own failures; the game loop never waits on
/// or checks audio.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    fn resume(&mut self);
    /// Returns whether audio is now muted
    fn toggle_mute(&mut self) -> bool;
}

/// Sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio {
    muted: bool,
}

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}

    fn resume(&mut self) {}

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// Replay queued commands into a sink
///
/// Returns the mute state after the last toggle, if any toggle was queued.
pub fn dispatch<S: AudioSink + ?Sized>(
    commands: impl IntoIterator<Item = AudioCommand>,
    sink: &mut S,
) -> Option<bool> {
    let mut muted = None;
    for command in commands {
        match command {
            AudioCommand::Play(cue) => sink.play(cue),
            AudioCommand::Resume => sink.resume(),
            AudioCommand::ToggleMute => muted = Some(sink.toggle_mute()),
        }
    }
    muted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        played: Vec<SoundCue>,
        resumes: usize,
        muted: bool,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, cue: SoundCue) {
            self.played.push(cue);
        }

        fn resume(&mut self) {
            self.resumes += 1;
        }

        fn toggle_mute(&mut self) -> bool {
            self.muted = !self.muted;
            self.muted
        }
    }

    #[test]
    fn test_cue_names_round_trip() {
        for cue in SoundCue::ALL {
            assert_eq!(SoundCue::from_name(cue.name()), Some(cue));
        }
        assert_eq!(SoundCue::GameOver.name(), "gameOver");
        assert_eq!(SoundCue::from_name("bgMusic"), None);
    }

    #[test]
    fn test_dispatch_replays_in_order() {
        let mut sink = Recorder::default();
        let muted = dispatch(
            [
                AudioCommand::Resume,
                AudioCommand::Play(SoundCue::Jump),
                AudioCommand::Play(SoundCue::Score),
            ],
            &mut sink,
        );
        assert_eq!(muted, None);
        assert_eq!(sink.played, vec![SoundCue::Jump, SoundCue::Score]);
        assert_eq!(sink.resumes, 1);
    }

    #[test]
    fn test_dispatch_reports_last_mute_state() {
        let mut sink = Recorder::default();
        let muted = dispatch(
            [AudioCommand::ToggleMute, AudioCommand::ToggleMute, AudioCommand::ToggleMute],
            &mut sink,
        );
        assert_eq!(muted, Some(true));
    }

    #[test]
    fn test_null_audio_accepts_everything() {
        let mut sink = NullAudio::default();
        let muted = dispatch(
            [AudioCommand::Play(SoundCue::GameOver), AudioCommand::ToggleMute],
            &mut sink,
        );
        assert_eq!(muted, Some(true));
    }
}
