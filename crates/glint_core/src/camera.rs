//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera: an eye position, a look-at point, and an orthonormal
/// right/up basis spanning the image plane.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    eye: Vec3,
    look_at: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a camera looking from `eye` toward `look_at`.
    ///
    /// The basis is derived from the viewing direction and `up_hint`:
    /// right = dir x up_hint, up = dir x right, both normalized. The hint
    /// must not be parallel to the viewing direction (documented
    /// precondition; the basis degenerates otherwise).
    pub fn look_at(eye: Vec3, look_at: Vec3, up_hint: Vec3, width: u32, height: u32) -> Self {
        let dir = (look_at - eye).normalize();
        let right = dir.cross(up_hint).normalize();
        let up = dir.cross(right).normalize();

        Self {
            image_width: width,
            image_height: height,
            eye,
            look_at,
            right,
            up,
        }
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel centers map to NDC [-1, 1]; the look-at point is offset along
    /// the right/up basis and the direction runs from the eye through it.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = 2.0 * (x as f32 + 0.5) / self.image_width as f32 - 1.0;
        let ndc_y = 2.0 * (y as f32 + 0.5) / self.image_height as f32 - 1.0;

        let target = self.look_at + self.right * ndc_x + self.up * ndc_y;
        Ray::new(self.eye, (target - self.eye).normalize())
    }
}
