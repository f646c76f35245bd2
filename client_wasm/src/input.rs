//! Keyboard input handling

use game_core::Command;

/// Map a `KeyboardEvent.key` value to a game command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "p" | "P" => Some(Command::TogglePause),
        "1" => Some(Command::DebugScoreUp),
        "2" => Some(Command::DebugScoreDown),
        "3" => Some(Command::DebugScoreReset),
        _ => None,
    }
}
