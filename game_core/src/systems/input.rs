use crate::{Command, Config, Events, InputQueue, PauseState, Params, Score, Side};

/// Apply queued host commands (pause toggles and debug score keys)
pub fn ingest_inputs(
    queue: &mut InputQueue,
    config: &Config,
    pause: &mut PauseState,
    score: &mut Score,
    events: &mut Events,
) {
    for command in queue.drain() {
        match command {
            Command::TogglePause => {
                pause.toggle();
                events.pause_toggled = true;
            }
            Command::DoubleClick(pos) => {
                if config.contains(pos) {
                    pause.toggle();
                    events.pause_toggled = true;
                }
            }
            // Score keys only work in debug mode
            Command::DebugScoreUp if config.debug_level > 0 => {
                score.adjust(Side::Left, Params::DEBUG_SCORE_STEP);
            }
            Command::DebugScoreDown if config.debug_level > 0 => {
                score.adjust(Side::Left, -Params::DEBUG_SCORE_STEP);
            }
            Command::DebugScoreReset if config.debug_level > 0 => {
                score.reset();
            }
            Command::DebugScoreUp | Command::DebugScoreDown | Command::DebugScoreReset => {}
        }
    }
}
