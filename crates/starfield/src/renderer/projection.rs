use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Whether a pixel-space point falls on the surface.
    /// Coordinates are truncated toward zero, then tested against `[0, width) x [0, height)`.
    pub fn contains(&self, point: Vec2) -> bool {
        let px = point.x as i64;
        let py = point.y as i64;
        px >= 0 && py >= 0 && px < self.width as i64 && py < self.height as i64
    }

    /// Orthographic projection for pixel coordinates.
    /// Origin top-left, Y down, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width as f32, self.height as f32, 0.0, 0.0, 1.0)
    }
}

/// Pinhole projection from star space (lateral offset + depth) onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub viewport: Viewport,
    pub focal_scale: f32,
}

impl Projector {
    pub fn new(viewport: Viewport, focal_scale: f32) -> Self {
        Self { viewport, focal_scale }
    }

    /// Perspective division: `center + (lateral / depth) * focal_scale`.
    /// Callers guard against zero depth.
    pub fn project(&self, lateral: Vec2, depth: f32) -> Vec2 {
        self.viewport.center() + (lateral / depth) * self.focal_scale
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn center_point_projects_to_viewport_center() {
        let projector = Projector::new(Viewport::new(640, 480), 60.0);
        let p = projector.project(Vec2::ZERO, 45.0);
        assert_eq!(p, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn lateral_offset_scales_with_inverse_depth() {
        let projector = Projector::new(Viewport::new(640, 480), 60.0);
        let p = projector.project(Vec2::new(1000.0, 0.0), 100.0);
        assert_eq!(p, Vec2::new(920.0, 240.0));
        let near = projector.project(Vec2::new(10.0, -10.0), 5.0);
        assert_eq!(near, Vec2::new(440.0, 120.0));
    }

    #[test]
    fn contains_is_half_open() {
        let vp = Viewport::new(640, 480);
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(639.9, 479.9)));
        assert!(!vp.contains(Vec2::new(640.0, 10.0)));
        assert!(!vp.contains(Vec2::new(10.0, 480.0)));
        assert!(!vp.contains(Vec2::new(920.0, 240.0)));
        assert!(!vp.contains(Vec2::new(-1.0, 240.0)));
    }

    #[test]
    fn contains_truncates_toward_zero() {
        let vp = Viewport::new(640, 480);
        // -0.5 truncates to 0, which is inside
        assert!(vp.contains(Vec2::new(-0.5, 10.0)));
    }

    #[test]
    fn projection_matrix_maps_corners_to_clip_space() {
        let m = Viewport::new(640, 480).projection_matrix();
        let top_left = m.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let bottom_right = m.project_point3(Vec3::new(640.0, 480.0, 0.0));
        assert!((top_left.x + 1.0).abs() < 1e-5 && (top_left.y - 1.0).abs() < 1e-5);
        assert!((bottom_right.x - 1.0).abs() < 1e-5 && (bottom_right.y + 1.0).abs() < 1e-5);
    }
}
