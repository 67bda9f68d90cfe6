//! Scene aggregate and nearest-hit query.

use glint_math::Ray;

use crate::camera::Camera;
use crate::light::Light;
use crate::material::Color;
use crate::surface::{HitRecord, Surface};

/// A complete scene: surfaces, lights, ambient and sky colors, and the
/// camera. Built once from configuration and read-only during rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    pub surfaces: Vec<Surface>,
    pub lights: Vec<Light>,
    pub ambient: Color,
    pub sky: Color,
    pub camera: Camera,
}

impl Scene {
    /// Find the nearest intersection along a ray.
    ///
    /// Linear scan over all surfaces; the object count is small enough that
    /// an acceleration structure would not pay for itself. The returned
    /// normal is re-normalized.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut nearest: Option<HitRecord> = None;

        for surface in &self.surfaces {
            if let Some(hit) = surface.intersect(ray) {
                if nearest.as_ref().map_or(true, |n| hit.t < n.t) {
                    nearest = Some(hit);
                }
            }
        }

        nearest.map(|mut hit| {
            hit.normal = hit.normal.normalize();
            hit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::surface::Cylinder;
    use glint_math::Vec3;

    fn test_scene(surfaces: Vec<Surface>) -> Scene {
        Scene {
            surfaces,
            lights: Vec::new(),
            ambient: Color::splat(0.2),
            sky: Color::new(0.0, 0.5, 1.0),
            camera: Camera::look_at(Vec3::new(0.0, 0.5, -3.0), Vec3::ZERO, Vec3::Y, 100, 100),
        }
    }

    fn plain(ambient: f32) -> Material {
        Material::lambert(Color::splat(ambient), Color::ZERO, Color::ZERO, 1.0)
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        // Two concentric tubes; the ray must report the outer wall first.
        let scene = test_scene(vec![
            Surface::Cylinder(Cylinder::new(
                plain(0.1),
                plain(0.1),
                Vec3::ZERO,
                Vec3::Y,
                1.0,
                0.5,
            )),
            Surface::Cylinder(Cylinder::new(
                plain(0.9),
                plain(0.9),
                Vec3::ZERO,
                Vec3::Y,
                1.0,
                1.0,
            )),
        ]);

        let ray = Ray::new(Vec3::new(3.0, 0.5, 0.0), -Vec3::X);
        let hit = scene.nearest_hit(&ray).expect("hit");
        assert!((hit.t - 2.0).abs() < 1e-4);
        assert_eq!(hit.material.ambient, Color::splat(0.9));
    }

    #[test]
    fn test_nearest_hit_none_on_miss() {
        let scene = test_scene(vec![Surface::Cylinder(Cylinder::new(
            plain(0.1),
            plain(0.1),
            Vec3::ZERO,
            Vec3::Y,
            1.0,
            0.5,
        ))]);

        let ray = Ray::new(Vec3::new(3.0, 0.5, 0.0), Vec3::X);
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_nearest_hit_normal_is_unit() {
        let scene = test_scene(vec![Surface::Cylinder(Cylinder::new(
            plain(0.1),
            plain(0.1),
            Vec3::ZERO,
            Vec3::Y,
            1.0,
            0.5,
        ))]);

        let ray = Ray::new(Vec3::new(3.0, 0.5, 0.1), -Vec3::X);
        let hit = scene.nearest_hit(&ray).expect("hit");
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
    }
}
