//! WebGPU client for the paddle game
//!
//! Engine-free rendering using wgpu for WebGPU API. The simulation lives in
//! `game_core`; this crate turns its draw calls into instanced quads and
//! forwards browser input.
//!
//! Note: Canvas variant is only available when compiling for wasm32 target

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

pub mod batch;
pub mod camera;
pub mod font;
pub mod input;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::*;
