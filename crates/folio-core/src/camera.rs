//! Camera description and the picking helpers used for hover detection.
//!
//! These types avoid platform APIs; the web frontend builds its view/projection
//! uniform from the same `Camera` the core picks against.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Visible world-space width and height on the plane through `target`.
    pub fn visible_extent(&self) -> Vec2 {
        let distance = (self.target - self.eye).length();
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * distance;
        Vec2::new(height * self.aspect, height)
    }

    /// World-space ray through a point given in normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }
}

/// Distance along the ray to the first hit of the sphere, if in front of the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Hit point of the ray on the plane `z = plane_z`, if it lies in front of the origin.
#[inline]
pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<Vec3> {
    if ray_dir.z.abs() < 1e-6 {
        return None;
    }
    let t = (plane_z - ray_origin.z) / ray_dir.z;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}
