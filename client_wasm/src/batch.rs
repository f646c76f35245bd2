//! Collects a frame's drawing as instanced quads

use game_core::{Canvas, Rgba, BACKGROUND};
use glam::Vec2;

use crate::font;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, width, height (px)
    pub axis: [f32; 4],      // cos, sin of the quad's rotation; zw unused
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    fn quad(center: Vec2, size: Vec2, axis: Vec2, tint: Rgba) -> Self {
        Self {
            transform: [center.x, center.y, size.x, size.y],
            axis: [axis.x, axis.y, 0.0, 0.0],
            tint,
        }
    }
}

/// Canvas implementation that turns every primitive into quads
#[derive(Debug, Clone)]
pub struct QuadBatch {
    pub clear_color: Rgba,
    pub instances: Vec<InstanceData>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self {
            clear_color: BACKGROUND,
            instances: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for QuadBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for QuadBatch {
    /// Starts a new frame: drops queued quads and sets the background
    fn clear(&mut self, color: Rgba) {
        self.clear_color = color;
        self.instances.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.instances
            .push(InstanceData::quad(pos + size / 2.0, size, Vec2::X, color));
    }

    /// Square-capped stroke: extends half the weight past each end
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba) {
        let delta = to - from;
        let length = delta.length();
        if length <= f32::EPSILON || weight <= 0.0 {
            return;
        }
        self.instances.push(InstanceData::quad(
            (from + to) / 2.0,
            Vec2::new(length + weight, weight),
            delta / length,
            color,
        ));
    }

    fn text(&mut self, text: &str, anchor: Vec2, size: f32, color: Rgba) {
        for (pos, rect_size) in font::layout(text, anchor, size) {
            self.fill_rect(pos, rect_size, color);
        }
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        font::text_width(text, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::FOREGROUND;

    #[test]
    fn test_instance_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 48);
    }

    #[test]
    fn test_fill_rect_is_centered() {
        let mut batch = QuadBatch::new();
        batch.fill_rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 150.0), FOREGROUND);

        assert_eq!(batch.len(), 1);
        let instance = batch.instances[0];
        assert_eq!(instance.transform, [25.0, 95.0, 30.0, 150.0]);
        assert_eq!(instance.axis, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(instance.tint, FOREGROUND);
    }

    #[test]
    fn test_vertical_line_is_rotated_and_capped() {
        let mut batch = QuadBatch::new();
        batch.line(Vec2::new(810.0, 8.0), Vec2::new(810.0, 73.0), 13.0, FOREGROUND);

        let instance = batch.instances[0];
        assert_eq!(instance.transform, [810.0, 40.5, 78.0, 13.0]);
        assert_eq!(instance.axis, [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_degenerate_shapes_are_skipped() {
        let mut batch = QuadBatch::new();
        batch.line(Vec2::ONE, Vec2::ONE, 13.0, FOREGROUND);
        batch.fill_rect(Vec2::ZERO, Vec2::new(0.0, 10.0), FOREGROUND);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_clear_starts_new_frame() {
        let mut batch = QuadBatch::new();
        batch.fill_rect(Vec2::ZERO, Vec2::ONE, FOREGROUND);
        batch.clear([0.0, 0.0, 0.0, 1.0]);

        assert!(batch.is_empty());
        assert_eq!(batch.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_text_uses_font_metrics() {
        let mut batch = QuadBatch::new();
        batch.text("07", Vec2::new(405.0, 150.0), 120.0, FOREGROUND);

        assert!(!batch.is_empty());
        assert_eq!(batch.text_width("07", 120.0), font::text_width("07", 120.0));
    }

    #[test]
    fn test_full_game_frame_fills_batch() {
        let mut game = game_core::Game::new(game_core::Config::new(), game_core::GameRng::new(4));
        let mut batch = QuadBatch::new();

        game.frame(16.0, &mut batch);

        // Center dashes, score digits, entities and the pause prompt
        assert!(batch.len() > 20);
        assert_eq!(batch.clear_color, BACKGROUND);
    }
}
