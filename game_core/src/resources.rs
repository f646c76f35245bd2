use glam::Vec2;

use crate::{Params, Side};

/// Time resource for tracking simulation time (milliseconds)
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Elapsed time for this frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Start a new frame of `raw_dt` ms, clamped to `[0, max_dt]`
    pub fn advance(&mut self, raw_dt: f32, max_dt: f32) {
        self.dt = crate::clamp(raw_dt, 0.0, max_dt);
        self.now += self.dt;
    }

    /// Frames per second implied by the current frame time
    pub fn fps(&self) -> f32 {
        if self.dt > 0.0 {
            1000.0 / self.dt
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::DEFAULT_FRAME_MS,
            now: 0.0,
        }
    }
}

/// Game score tracking, index 0 = left player, index 1 = right player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: i32,
    pub right: i32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        self.adjust(side, 1);
    }

    pub fn adjust(&mut self, side: Side, delta: i32) {
        match side {
            Side::Left => self.left = self.left.saturating_add(delta),
            Side::Right => self.right = self.right.saturating_add(delta),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn as_pair(&self) -> [i32; 2] {
        [self.left, self.right]
    }
}

/// Two-digit score text: clipped to [0, 99], zero padded
pub fn format_score(value: i32) -> String {
    format!("{:02}", value.clamp(0, Params::SCORE_MAX_DISPLAY))
}

/// Whether the simulation is frozen behind the pause prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseState {
    pub paused: bool,
}

impl PauseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }
}

impl Default for PauseState {
    // The game opens on the pause prompt
    fn default() -> Self {
        Self { paused: true }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source
    #[cfg(feature = "getrandom")]
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_wall: bool,
    pub ball_recovered: bool,
    pub paddle_strike: Option<Side>,
    pub pause_toggled: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_scored,
            Side::Right => self.right_scored,
        }
    }
}

/// Discrete input from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePause,
    /// Double click at a canvas position
    DoubleClick(Vec2),
    /// Debug: left score += 5
    DebugScoreUp,
    /// Debug: left score -= 5
    DebugScoreDown,
    /// Debug: both scores back to 0
    DebugScoreReset,
}

/// Commands queued by the host between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub commands: Vec<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

/// Pointer position in canvas coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub latest: Vec2,  // Last position reported by the host
    pub tracked: Vec2, // Position the pointer-tracking paddle follows
}

impl Pointer {
    pub fn new(pos: Vec2) -> Self {
        Self {
            latest: pos,
            tracked: pos,
        }
    }

    pub fn set(&mut self, pos: Vec2) {
        self.latest = pos;
    }

    /// Copy the latest host position into the tracked vector
    pub fn latch(&mut self) {
        self.tracked = self.latest;
    }
}
