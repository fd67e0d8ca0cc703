//! Game State Machine
//!
//! Ready, Playing and GameOver with an explicit transition table.

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Ready,
    Playing,
    GameOver,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    PipeCollision,
    OutOfBounds,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Crash,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    phase: Phase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; rejected actions leave the phase unchanged
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                log::debug!("phase {:?} -> {:?} on {:?}", from, to, action);
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => {
                log::debug!("rejected {:?} in phase {:?}", action, from);
                TransitionResult {
                    success: false,
                    from,
                    to: from,
                    action,
                }
            }
        }
    }

    fn next_phase(&self, action: GameAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Ready, GameAction::Start) => Some(Phase::Playing),
            (Phase::Playing, GameAction::Crash) => Some(Phase::GameOver),
            (Phase::GameOver, GameAction::Restart) => Some(Phase::Ready),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
