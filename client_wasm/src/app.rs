//! The handle the host page drives each animation frame

use game_core::{Command, Config, Game, GameRng, Params, Side};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::batch::QuadBatch;
use crate::input::command_for_key;
use crate::renderer::Renderer;

/// Game plus renderer, owned by the page script
#[wasm_bindgen]
pub struct PongApp {
    game: Game,
    renderer: Renderer,
    batch: QuadBatch,
    last_frame: Option<f64>,
}

#[wasm_bindgen]
impl PongApp {
    /// Logical canvas width in pixels
    pub fn width(&self) -> f32 {
        self.game.config.canvas_width
    }

    pub fn height(&self) -> f32 {
        self.game.config.canvas_height
    }

    pub fn is_paused(&self) -> bool {
        self.game.is_paused()
    }

    /// Run one frame; `now_ms` comes from `performance.now()`
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let dt = match self.last_frame {
            Some(last) => (now_ms - last) as f32,
            None => Params::DEFAULT_FRAME_MS,
        };
        self.last_frame = Some(now_ms);

        self.game.frame(dt, &mut self.batch);
        self.log_events();

        self.renderer.draw(&self.batch).map_err(|e| {
            console_error!("Frame failed: {}", e);
            JsValue::from_str(&e)
        })
    }

    /// `KeyboardEvent.key` of a key press; the page filters out auto-repeat
    pub fn key_down(&mut self, key: &str) {
        if let Some(command) = command_for_key(key) {
            self.game.push_command(command);
        }
    }

    /// Pointer position in canvas pixels
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.game.set_pointer(Vec2::new(x, y));
    }

    pub fn double_click(&mut self, x: f32, y: f32) {
        self.game.push_command(Command::DoubleClick(Vec2::new(x, y)));
    }

    /// 0 = off, 1 = collision faces and fps, 2 = plus ball velocity
    pub fn set_debug_level(&mut self, level: u8) {
        self.game.config.debug_level = level;
    }
}

impl PongApp {
    fn log_events(&self) {
        let events = &self.game.events;
        if events.pause_toggled {
            console_log!(
                "{}",
                if self.game.is_paused() {
                    "Paused"
                } else {
                    "Resumed"
                }
            );
        }
        for side in [Side::Left, Side::Right] {
            if events.scored(side) {
                let [left, right] = self.game.score.as_pair();
                console_log!("{:?} player scored: {} - {}", side, left, right);
            }
        }
        if events.ball_recovered {
            console_error!("Ball left the canvas unexpectedly, reset to center");
        }
    }
}

/// Initialize WebGPU on `canvas` and create a paused game
#[wasm_bindgen]
pub async fn start(canvas: HtmlCanvasElement) -> Result<PongApp, JsValue> {
    console_error_panic_hook::set_once();

    let config = Config::new();
    let renderer = Renderer::new(canvas, config.canvas_size())
        .await
        .map_err(|e| {
            console_error!("Renderer init failed: {}", e);
            JsValue::from_str(&e)
        })?;
    console_log!(
        "Renderer ready: {}x{} {:?}",
        renderer.surface_config.width,
        renderer.surface_config.height,
        renderer.surface_config.format
    );

    Ok(PongApp {
        game: Game::new(config, GameRng::from_entropy()),
        renderer,
        batch: QuadBatch::new(),
        last_frame: None,
    })
}
