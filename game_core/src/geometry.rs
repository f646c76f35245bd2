use glam::Vec2;

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: if the range is inverted the
/// result is `max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Check whether two rectangles, given as top-left position and size, overlap.
/// Rectangles that only share an edge do not overlap.
pub fn colliding(pos1: Vec2, size1: Vec2, pos2: Vec2, size2: Vec2) -> bool {
    pos1.x + size1.x > pos2.x
        && pos1.x < pos2.x + size2.x
        && pos1.y + size1.y > pos2.y
        && pos1.y < pos2.y + size2.y
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        colliding(self.pos, self.size, other.pos, other.size)
    }
}
