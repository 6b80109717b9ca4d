//! Camera for Pong game
//!
//! Simple 2D orthographic camera in screen pixels, y pointing down

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera covering `width` x `height` pixels
    /// with (0, 0) at the top-left corner
    pub fn orthographic(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
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
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn project(camera: &Camera, point: Vec3) -> Vec4 {
        camera.view_proj() * point.extend(1.0)
    }

    fn assert_close(actual: Vec4, x: f32, y: f32) {
        assert!((actual.x - x).abs() < 1e-5, "x: {} vs {}", actual.x, x);
        assert!((actual.y - y).abs() < 1e-5, "y: {} vs {}", actual.y, y);
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::orthographic(800.0, 600.0);
        assert_close(project(&camera, Vec3::new(0.0, 0.0, 0.0)), -1.0, 1.0);
        assert_close(project(&camera, Vec3::new(800.0, 600.0, 0.0)), 1.0, -1.0);
        assert_close(project(&camera, Vec3::new(400.0, 300.0, 0.0)), 0.0, 0.0);
    }

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
