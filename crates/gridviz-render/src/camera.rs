//! Camera and view management.

use glam::{Mat4, Vec3, Vec4Swizzles};

/// Direction from the scene center towards the camera for the default view.
const ISOMETRIC_DIRECTION: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// A 3D perspective camera for viewing the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a new camera with default settings (+Z up).
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(3.0, 3.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio,
            near: 0.01,
            far: 1000.0,
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector from the camera towards its target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Unit vector pointing right in screen space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Direction towards the key light: a headlight raised slightly above and
    /// to the right of the camera so adjacent box faces shade differently.
    #[must_use]
    pub fn light_direction(&self) -> Vec3 {
        (-self.forward() + self.up * 0.6 + self.right() * 0.3).normalize_or_zero()
    }

    /// Places the camera on the isometric diagonal so the whole box is visible.
    ///
    /// The distance fits the bounding sphere of the box inside the narrower of
    /// the vertical and horizontal fields of view.
    pub fn look_at_box(&mut self, min: Vec3, max: Vec3) {
        let center = (min + max) * 0.5;
        let radius = ((max - min).length() * 0.5).max(1e-3);

        let half_vertical = self.fov * 0.5;
        let half_horizontal = (half_vertical.tan() * self.aspect_ratio).atan();
        let half_fov = half_vertical.min(half_horizontal);
        let distance = radius / half_fov.sin() * 1.05;

        self.target = center;
        self.position = center + ISOMETRIC_DIRECTION.normalize() * distance;
        self.up = Vec3::Z;
        self.near = ((distance - radius) * 0.5).max(distance * 1e-3);
        self.far = distance + radius * 2.0;
    }

    /// Projects a world-space point to pixel coordinates.
    ///
    /// Returns `(x, y, depth)` with the origin at the top-left corner and depth
    /// in `[0, 1]`, or `None` for points behind the camera.
    #[must_use]
    pub fn project(&self, point: Vec3, width: u32, height: u32) -> Option<Vec3> {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(Vec3::new(
            (ndc.x + 1.0) * 0.5 * width as f32,
            (1.0 - ndc.y) * 0.5 * height as f32,
            ndc.z,
        ))
    }

    /// Returns the world-space ray `(origin, direction)` through the center of
    /// pixel `(px, py)`.
    #[must_use]
    pub fn ray_through(&self, px: u32, py: u32, width: u32, height: u32) -> (Vec3, Vec3) {
        self.rays(width, height).through(px, py)
    }

    /// Precomputes ray generation for an image of the given size.
    #[must_use]
    pub fn rays(&self, width: u32, height: u32) -> PixelRays {
        PixelRays {
            origin: self.position,
            inverse: self.view_projection_matrix().inverse(),
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Generates camera rays through pixel centers.
#[derive(Debug, Clone, Copy)]
pub struct PixelRays {
    origin: Vec3,
    inverse: Mat4,
    width: f32,
    height: f32,
}

impl PixelRays {
    /// Returns `(origin, direction)` for pixel `(px, py)`.
    #[must_use]
    pub fn through(&self, px: u32, py: u32) -> (Vec3, Vec3) {
        let ndc_x = (px as f32 + 0.5) / self.width * 2.0 - 1.0;
        let ndc_y = 1.0 - (py as f32 + 0.5) / self.height * 2.0;

        let near = self.inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = self.inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        (self.origin, (far - near).normalize_or_zero())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(4.0 / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted(min: Vec3, max: Vec3, aspect: f32) -> Camera {
        let mut camera = Camera::new(aspect);
        camera.look_at_box(min, max);
        camera
    }

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::default();
        assert_eq!(camera.up, Vec3::Z);
        assert!((camera.aspect_ratio - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_projects_to_center() {
        let camera = fitted(Vec3::ZERO, Vec3::new(100.0, 100.0, 50.0), 2.0);
        let p = camera.project(camera.target, 200, 100).unwrap();
        assert!((p.x - 100.0).abs() < 1e-2);
        assert!((p.y - 50.0).abs() < 1e-2);
        assert!(p.z > 0.0 && p.z < 1.0);
    }

    #[test]
    fn test_box_fits_in_view() {
        let (min, max) = (Vec3::new(-5.0, 0.0, 2.0), Vec3::new(95.0, 100.0, 2.0));
        let camera = fitted(min, max, 1024.0 / 768.0);
        for i in 0..8u32 {
            let corner = Vec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
            let p = camera.project(corner, 1024, 768).unwrap();
            assert!((0.0..=1024.0).contains(&p.x), "x out of view: {p}");
            assert!((0.0..=768.0).contains(&p.y), "y out of view: {p}");
            assert!((0.0..=1.0).contains(&p.z), "depth out of range: {p}");
        }
    }

    #[test]
    fn test_isometric_view_from_above() {
        let camera = fitted(Vec3::ZERO, Vec3::ONE, 1.0);
        let offset = camera.position - camera.target;
        assert!(offset.x > 0.0 && offset.y > 0.0 && offset.z > 0.0);
        assert!((offset.x - offset.z).abs() < 1e-4);
    }

    #[test]
    fn test_point_behind_camera() {
        let camera = fitted(Vec3::ZERO, Vec3::ONE, 1.0);
        let behind = camera.position - camera.forward() * 10.0;
        assert!(camera.project(behind, 64, 64).is_none());
    }

    #[test]
    fn test_center_ray_follows_view_direction() {
        let camera = fitted(Vec3::ZERO, Vec3::splat(10.0), 1.0);
        let (origin, direction) = camera.ray_through(50, 50, 101, 101);
        assert_eq!(origin, camera.position);
        assert!(direction.dot(camera.forward()) > 0.9999);
    }

    #[test]
    fn test_light_is_unit_and_faces_scene() {
        let camera = fitted(Vec3::ZERO, Vec3::ONE, 1.0);
        let light = camera.light_direction();
        assert!((light.length() - 1.0).abs() < 1e-5);
        assert!(light.dot(-camera.forward()) > 0.5);
    }
}
