//! Frame composition against an abstract drawing surface

use glam::Vec2;
use hecs::World;

use crate::{format_score, Ball, Config, Paddle, Score, Side, Time};

/// sRGB-encoded RGBA color, written to the surface without conversion
pub type Rgba = [f32; 4];

pub const BACKGROUND: Rgba = [28.0 / 255.0, 129.0 / 255.0, 126.0 / 255.0, 1.0]; // #1c817e
pub const FOREGROUND: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const DEBUG_RED: Rgba = [1.0, 0.0, 0.0, 1.0];

// Layout (px)
const CENTER_LINE_START: f32 = 8.0;
const CENTER_LINE_DASH: f32 = 65.0;
const CENTER_LINE_STEP: f32 = 90.0;
const CENTER_LINE_WEIGHT: f32 = 13.0;
const SCORE_TEXT_SIZE: f32 = 120.0;
const SCORE_BASELINE: f32 = 150.0;
const FPS_TEXT_SIZE: f32 = 30.0;
const VELOCITY_TEXT_SIZE: f32 = 20.0;
const DEBUG_TEXT_BOTTOM_MARGIN: f32 = 40.0;

pub const PAUSE_PROMPT: &str = "double click to play";

/// Drawing primitives the game needs from its host
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba);

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba);

    /// Draw `text` horizontally centered on `anchor.x` with its baseline at `anchor.y`
    fn text(&mut self, text: &str, anchor: Vec2, size: f32, color: Rgba);

    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// A recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Rect { pos: Vec2, size: Vec2, color: Rgba },
    Line { from: Vec2, to: Vec2, weight: f32, color: Rgba },
    Text { text: String, anchor: Vec2, size: f32, color: Rgba },
}

/// Canvas that records calls instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
    /// Advance per character, as a fraction of the text size
    pub char_advance: f32,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            char_advance: 0.6,
        }
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        self.calls.push(DrawCall::Rect { pos, size, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            weight,
            color,
        });
    }

    fn text(&mut self, text: &str, anchor: Vec2, size: f32, color: Rgba) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            anchor,
            size,
            color,
        });
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.char_advance
    }
}

/// Background, center line, scores and entities
pub fn draw_scene(canvas: &mut impl Canvas, world: &World, score: &Score, config: &Config) {
    let width = config.canvas_width;
    let height = config.canvas_height;

    canvas.clear(BACKGROUND);

    let mut y = CENTER_LINE_START;
    while y + CENTER_LINE_DASH < height {
        canvas.line(
            Vec2::new(width / 2.0, y),
            Vec2::new(width / 2.0, y + CENTER_LINE_DASH),
            CENTER_LINE_WEIGHT,
            FOREGROUND,
        );
        y += CENTER_LINE_STEP;
    }

    for (side, x) in [(Side::Left, width * 0.25), (Side::Right, width * 0.75)] {
        canvas.text(
            &format_score(score.get(side)),
            Vec2::new(x, SCORE_BASELINE),
            SCORE_TEXT_SIZE,
            FOREGROUND,
        );
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        canvas.fill_rect(ball.pos, ball.size, FOREGROUND);
    }
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        canvas.fill_rect(paddle.pos, paddle.size, FOREGROUND);
    }
}

/// Prompt shown while paused, on a backing box that hides the center line
pub fn draw_pause_overlay(canvas: &mut impl Canvas, config: &Config) {
    let center = config.canvas_size() / 2.0;
    let size = SCORE_TEXT_SIZE;
    let text_width = canvas.text_width(PAUSE_PROMPT, size);

    canvas.fill_rect(
        Vec2::new(center.x - text_width / 2.0, center.y - size / 1.75),
        Vec2::new(text_width, size),
        BACKGROUND,
    );
    canvas.text(
        PAUSE_PROMPT,
        Vec2::new(center.x, center.y + size / 4.0),
        size,
        FOREGROUND,
    );
}

/// Collision faces, frame rate and ball velocity, depending on the debug level
pub fn draw_debug_overlay(canvas: &mut impl Canvas, world: &World, time: &Time, config: &Config) {
    if config.debug_level == 0 {
        return;
    }
    let anchor = Vec2::new(
        config.canvas_width * 0.25,
        config.canvas_height - DEBUG_TEXT_BOTTOM_MARGIN,
    );

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        let face = paddle.front_face(config.paddle_face_width);
        canvas.fill_rect(face.pos, face.size, DEBUG_RED);
    }

    canvas.text(
        &format!("fps: {}", time.fps().round()),
        anchor,
        FPS_TEXT_SIZE,
        FOREGROUND,
    );

    if config.debug_level >= 2 {
        for (_e, ball) in world.query::<&Ball>().iter() {
            canvas.text(
                &format!("x: {:.2}, y: {:.2}", ball.vel.x, ball.vel.y),
                anchor,
                VELOCITY_TEXT_SIZE,
                FOREGROUND,
            );
        }
    }
}
