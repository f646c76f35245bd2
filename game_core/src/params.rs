/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (px)
    pub const CANVAS_WIDTH: f32 = 1620.0;
    pub const CANVAS_HEIGHT: f32 = 1080.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    pub const PADDLE_INSET: f32 = 60.0; // distance from the side wall
    pub const PADDLE_START_OFFSET: f32 = 100.0; // above the canvas middle
    pub const LEFT_PADDLE_SPEED: f32 = 4.0;
    pub const RIGHT_PADDLE_SPEED: f32 = 3.4;
    pub const PADDLE_THRESHOLD: f32 = 40.0;
    pub const PADDLE_FACE_WIDTH: f32 = 1.0;

    // Ball
    pub const BALL_SIZE: f32 = 35.0;
    pub const BALL_SPEED: f32 = 4.1;
    pub const BALL_LAUNCH_DELAY: f32 = 450.0; // ms
    pub const BALL_MIN_Y_SPEED: f32 = 1.0;
    pub const STRIKE_SPIN: f32 = 0.03;

    // Timing
    pub const MOTION_SCALE: f32 = 0.2; // px per (speed unit * ms)
    pub const MAX_FRAME_MS: f32 = 100.0;
    pub const DEFAULT_FRAME_MS: f32 = 1000.0 / 60.0;

    // Score
    pub const SCORE_MAX_DISPLAY: i32 = 99;
    pub const DEBUG_SCORE_STEP: i32 = 5;
}
