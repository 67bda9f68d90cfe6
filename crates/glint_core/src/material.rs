//! Phong material model with Schlick-Fresnel reflectance.

use glint_math::Vec3;

/// Color type alias (RGB values, unbounded until tone mapping)
pub type Color = Vec3;

/// Surface material: Fresnel base reflectance, refractive index, and the
/// Phong ambient/diffuse/specular triple, plus the transport flags the
/// integrator dispatches on.
///
/// A zero `diffuse` color is the sentinel for "no diffuse component"; the
/// integrator substitutes the procedural checker pattern only when diffuse
/// is non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Fresnel reflectance at normal incidence
    pub f0: Color,
    /// Scalar refractive index (>= 1)
    pub refractive_index: f32,
    /// Phong shininess exponent
    pub shininess: f32,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Spawn a mirror ray at hits
    pub reflective: bool,
    /// Spawn a transmission ray at hits
    pub refractive: bool,
    /// Flat caustic receiver: photon deposits land only on flat surfaces
    pub flat: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            f0: Color::ZERO,
            refractive_index: 1.0,
            shininess: 0.0,
            ambient: Color::ZERO,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            reflective: false,
            refractive: false,
            flat: false,
        }
    }
}

impl Material {
    /// A reflective metal described by its complex refractive index (n, k).
    pub fn metal(ambient: Color, n: Color, k: Color) -> Self {
        let mut material = Self {
            ambient,
            reflective: true,
            ..Default::default()
        };
        material.set_reflectance(n, k);
        material
    }

    /// A refractive dielectric (k = 0), e.g. glass with n = 1.5.
    pub fn glass(n: f32) -> Self {
        let mut material = Self {
            refractive: true,
            ..Default::default()
        };
        material.set_reflectance(Color::splat(n), Color::ZERO);
        material
    }

    /// A non-transporting Phong surface.
    pub fn lambert(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            ..Default::default()
        }
    }

    /// Mark this material as a flat caustic receiver.
    pub fn as_flat(mut self) -> Self {
        self.flat = true;
        self
    }

    /// Derive F0 and the scalar refractive index from the complex
    /// refractive index components: F0 = ((n-1)^2 + k^2) / ((n+1)^2 + k^2)
    /// per channel. Metals carry non-zero k, dielectrics k = 0.
    pub fn set_reflectance(&mut self, n: Color, k: Color) {
        let one = Color::ONE;
        self.f0 = ((n - one) * (n - one) + k * k) / ((n + one) * (n + one) + k * k);
        self.refractive_index = n.x;
    }

    /// Refraction direction by Snell's law.
    ///
    /// Flips the normal and inverts the index ratio when the ray exits the
    /// medium. Returns `None` on total internal reflection; the caller skips
    /// the refractive branch in that case.
    pub fn refract(&self, normal: Vec3, incoming: Vec3) -> Option<Vec3> {
        let mut cos_a = -normal.dot(incoming);
        let mut normal = normal;
        let mut cn = self.refractive_index;

        if cos_a < 0.0 {
            // Exiting the medium
            cos_a = -cos_a;
            normal = -normal;
            cn = 1.0 / self.refractive_index;
        }

        let disc = 1.0 - (1.0 - cos_a * cos_a) / (cn * cn);
        if disc < 0.0 {
            return None;
        }

        Some(incoming / cn + normal * (cos_a / cn - disc.sqrt()))
    }

    /// Schlick's approximation: F0 + (1 - F0) * (1 - |n.i|)^5.
    pub fn fresnel(&self, normal: Vec3, incoming: Vec3) -> Color {
        let cos_a = normal.dot(incoming).abs();
        self.f0 + (Color::ONE - self.f0) * (1.0 - cos_a).powi(5)
    }

    /// Local Phong radiance for one light.
    ///
    /// `light_dir` points toward the light, `view` toward the eye, both
    /// normalized. A non-positive diffuse cosine yields zero radiance; the
    /// specular half-vector term is added only when n.h is positive.
    pub fn shade(&self, light_dir: Vec3, normal: Vec3, view: Vec3, intensity: Color) -> Color {
        let cos_theta = normal.dot(light_dir);
        if cos_theta <= 0.0 {
            return Color::ZERO;
        }

        let mut radiance = intensity * self.diffuse * cos_theta;

        let half = (light_dir + view).normalize();
        let cos_delta = normal.dot(half);
        if cos_delta > 0.0 {
            radiance += intensity * self.specular * cos_delta.powf(self.shininess);
        }

        radiance
    }
}

/// Mirror reflection: incoming - 2 * (incoming . normal) * normal.
///
/// Holds regardless of which side the incoming ray approaches from.
#[inline]
pub fn reflect(normal: Vec3, incoming: Vec3) -> Vec3 {
    incoming - 2.0 * incoming.dot(normal) * normal
}
