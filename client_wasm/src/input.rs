//! Keyboard and pointer input mapping

use game_core::{InputEvent, InputKind};

/// Map a key to a game input
///
/// Any key flaps, except `m` which toggles sound.
pub fn handle_key_down(key: &str) -> InputKind {
    match key {
        "m" | "M" => InputKind::ToggleMute,
        _ => InputKind::Jump,
    }
}

/// Touch or click on the play field
pub fn handle_pointer_down(timestamp: f64) -> InputEvent {
    InputEvent::jump(timestamp)
}

/// Build a timestamped event from a key press
pub fn key_event(key: &str, timestamp: f64) -> InputEvent {
    InputEvent {
        kind: handle_key_down(key),
        timestamp,
    }
}
