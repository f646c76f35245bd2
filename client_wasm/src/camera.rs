//! Camera for the game canvas
//!
//! Pixel-space orthographic projection: origin top-left, y pointing down

use glam::{Mat4, Vec2};

/// Camera struct
pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Map `size` logical pixels onto the whole surface
    pub fn pixel_space(size: Vec2) -> Self {
        let projection = Mat4::orthographic_rh(0.0, size.x, size.y, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn to_clip(camera: &Camera, x: f32, y: f32) -> Vec4 {
        camera.projection * Vec4::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_top_left_maps_to_clip_top_left() {
        let camera = Camera::pixel_space(Vec2::new(1620.0, 1080.0));
        let clip = to_clip(&camera, 0.0, 0.0);
        assert!((clip.x + 1.0).abs() < 1e-5);
        assert!((clip.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_bottom_right_maps_to_clip_bottom_right() {
        let camera = Camera::pixel_space(Vec2::new(1620.0, 1080.0));
        let clip = to_clip(&camera, 1620.0, 1080.0);
        assert!((clip.x - 1.0).abs() < 1e-5);
        assert!((clip.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
