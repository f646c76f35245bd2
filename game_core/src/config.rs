use glam::Vec2;

use crate::{Params, Side};

/// Settings for one paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleConfig {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub threshold: f32,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub left_paddle: PaddleConfig,
    pub right_paddle: PaddleConfig,
    pub paddle_face_width: f32,
    pub ball_size: Vec2,
    pub ball_speed: f32,
    pub ball_launch_delay: f32,
    pub ball_min_y_speed: f32,
    pub strike_spin: f32,
    pub motion_scale: f32,
    pub max_frame_ms: f32,
    /// 0 = off, 1 = collision boxes, fps and score keys, 2 = ball velocity readout
    pub debug_level: u8,
}

impl Default for Config {
    fn default() -> Self {
        let width = Params::CANVAS_WIDTH;
        let height = Params::CANVAS_HEIGHT;
        let paddle_size = Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT);
        let paddle_y = height / 2.0 - Params::PADDLE_START_OFFSET;

        Self {
            canvas_width: width,
            canvas_height: height,
            left_paddle: PaddleConfig {
                pos: Vec2::new(Params::PADDLE_INSET, paddle_y),
                size: paddle_size,
                speed: Params::LEFT_PADDLE_SPEED,
                threshold: Params::PADDLE_THRESHOLD,
            },
            right_paddle: PaddleConfig {
                pos: Vec2::new(
                    width - Params::PADDLE_INSET - Params::PADDLE_WIDTH,
                    paddle_y,
                ),
                size: paddle_size,
                speed: Params::RIGHT_PADDLE_SPEED,
                threshold: Params::PADDLE_THRESHOLD,
            },
            paddle_face_width: Params::PADDLE_FACE_WIDTH,
            ball_size: Vec2::splat(Params::BALL_SIZE),
            ball_speed: Params::BALL_SPEED,
            ball_launch_delay: Params::BALL_LAUNCH_DELAY,
            ball_min_y_speed: Params::BALL_MIN_Y_SPEED,
            strike_spin: Params::STRIKE_SPIN,
            motion_scale: Params::MOTION_SCALE,
            max_frame_ms: Params::MAX_FRAME_MS,
            debug_level: 0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    pub fn paddle(&self, side: Side) -> &PaddleConfig {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    /// Top-left corner that centers the ball on the canvas
    pub fn ball_spawn(&self) -> Vec2 {
        (self.canvas_size() - self.ball_size) / 2.0
    }

    /// Check whether a point lies on the canvas
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.x <= self.canvas_width
            && point.y >= 0.0
            && point.y <= self.canvas_height
    }
}
