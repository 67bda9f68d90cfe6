//! Point lights with inverse-square falloff.

use std::f32::consts::PI;

use glint_math::Vec3;

use crate::material::Color;

/// A point light source with a radiant power spectrum.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub power: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, power: Color) -> Self {
        Self { position, power }
    }

    /// Unit direction from a world point toward the light.
    pub fn direction_to(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }

    /// Distance from a world point to the light.
    pub fn distance(&self, point: Vec3) -> f32 {
        (self.position - point).length()
    }

    /// Incident intensity at a world point: power / (4 pi d^2).
    pub fn intensity_at(&self, point: Vec3) -> Color {
        self.power / ((self.position - point).length_squared() * 4.0 * PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_unit() {
        let light = Light::new(Vec3::new(3.0, 5.0, 3.0), Color::ONE);
        let dir = light.direction_to(Vec3::ZERO);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.y > 0.0);
    }

    #[test]
    fn test_inverse_square_falloff() {
        let light = Light::new(Vec3::ZERO, Color::splat(100.0));
        let near = light.intensity_at(Vec3::new(1.0, 0.0, 0.0));
        let far = light.intensity_at(Vec3::new(2.0, 0.0, 0.0));

        // Doubling the distance quarters the intensity.
        assert!((near.x / far.x - 4.0).abs() < 1e-4);
        // 100 / (4 pi) at unit distance.
        assert!((near.x - 100.0 / (4.0 * PI)).abs() < 1e-4);
    }

    #[test]
    fn test_distance() {
        let light = Light::new(Vec3::new(0.0, 4.0, 3.0), Color::ONE);
        assert!((light.distance(Vec3::ZERO) - 5.0).abs() < 1e-6);
    }
}
