//! Surface primitives and ray intersection.
//!
//! Surfaces are a tagged enum rather than trait objects: the scene holds at
//! most a dozen primitives, so a match on the tag keeps the geometry data
//! contiguous and dispatch trivial.

use glint_math::{Ray, Vec3};

use crate::material::Material;

/// Numerical guard against self-intersection at secondary-ray origins.
pub const EPSILON: f32 = 1e-3;

/// Fixed world up, used as the bottom-cap normal.
const UP: Vec3 = Vec3::Y;

/// Record of a ray-surface intersection.
///
/// Constructed fresh per query and never mutated after return. The material
/// is borrowed from the surface that produced the hit.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// World-space position of the hit
    pub position: Vec3,
    /// Unit surface normal at the hit
    pub normal: Vec3,
    /// Material resolved for this hit (lateral vs. cap)
    pub material: &'a Material,
}

/// A scene primitive.
#[derive(Debug, Clone)]
pub enum Surface {
    Cylinder(Cylinder),
    Paraboloid(Paraboloid),
}

impl Surface {
    /// Intersect a ray with this surface.
    ///
    /// Returns `None` when the ray misses, when the hit falls outside the
    /// primitive's height range, or when the nearest root is within
    /// [`EPSILON`] of the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        match self {
            Surface::Cylinder(cylinder) => cylinder.intersect(ray),
            Surface::Paraboloid(paraboloid) => paraboloid.intersect(ray),
        }
    }
}

/// A cylinder with a bottom cap and no top cap.
///
/// The lateral surface uses `material`; the bottom disk plane uses
/// `cap_material`, which is always flagged as a flat caustic receiver.
#[derive(Debug, Clone)]
pub struct Cylinder {
    material: Material,
    cap_material: Material,
    base: Vec3,
    axis: Vec3,
    height: f32,
    radius: f32,
}

impl Cylinder {
    /// Create a cylinder. The axis is normalized on construction.
    pub fn new(
        material: Material,
        cap_material: Material,
        base: Vec3,
        axis: Vec3,
        height: f32,
        radius: f32,
    ) -> Self {
        Self {
            material,
            cap_material: cap_material.as_flat(),
            base,
            axis: axis.normalize(),
            height,
            radius,
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.base;
        let d_axis = ray.direction.dot(self.axis);
        let oc_axis = oc.dot(self.axis);

        // Quadratic in t for the squared distance from the axis line.
        let a = ray.direction.length_squared() - d_axis * d_axis;
        let b = 2.0 * (oc.dot(ray.direction) - oc_axis * d_axis);
        let c = oc.length_squared() - self.radius * self.radius - oc_axis * oc_axis;

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }

        let sqrt_disc = disc.sqrt();
        let mut t = (-b - sqrt_disc) / (2.0 * a);
        if t < 0.0 || t.abs() < EPSILON {
            t = (-b + sqrt_disc) / (2.0 * a);
        }
        if t < EPSILON {
            return None;
        }

        let position = ray.at(t);
        let hp = (position - self.base).dot(self.axis);

        if hp > 0.0 && hp < self.height {
            let normal = (position - (self.base + self.axis * hp)).normalize();
            return Some(HitRecord {
                t,
                position,
                normal,
                material: &self.material,
            });
        }

        if hp >= self.height {
            // No top cap
            return None;
        }

        // Below the base: fall back to the bottom-cap plane. The plane sits
        // at world height zero for every cylinder, not at the base point,
        // and it is unbounded, which is what makes the zero-height "table"
        // cylinder act as a floor.
        let denom = UP.dot(ray.direction);
        let t = -UP.dot(ray.origin) / denom;
        if !t.is_finite() || t < EPSILON {
            return None;
        }

        Some(HitRecord {
            t,
            position: ray.at(t),
            normal: UP,
            material: &self.cap_material,
        })
    }
}

/// An open paraboloid of revolution, valid between its vertex and `height`
/// along the axis.
///
/// The quadratic's constant term carries `ray.direction . axis / 4` in place
/// of a stored aperture, so the effective radius depends on the incoming
/// ray. The demo scene's silver dome is authored against this surface
/// definition; changing it changes the picture.
#[derive(Debug, Clone)]
pub struct Paraboloid {
    material: Material,
    vertex: Vec3,
    axis: Vec3,
    height: f32,
}

impl Paraboloid {
    /// Create a paraboloid. The axis is normalized on construction.
    pub fn new(material: Material, vertex: Vec3, axis: Vec3, height: f32) -> Self {
        Self {
            material,
            vertex,
            axis: axis.normalize(),
            height,
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let radius = ray.direction.dot(self.axis) / 4.0;

        let oc = ray.origin - self.vertex;
        let d_axis = ray.direction.dot(self.axis);
        let oc_axis = oc.dot(self.axis);

        let a = ray.direction.length_squared() - d_axis * d_axis;
        let b = 2.0 * (oc.dot(ray.direction) - oc_axis * d_axis);
        let c = oc.length_squared() - radius - oc_axis * oc_axis;

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }

        let sqrt_disc = disc.sqrt();
        let mut t = (-b - sqrt_disc) / (2.0 * a);
        if t < 0.0 {
            t = (-b + sqrt_disc) / (2.0 * a);
        }
        if t < EPSILON {
            return None;
        }

        let position = ray.at(t);
        let hp = (position - self.vertex).dot(self.axis);

        if hp > 0.0 && hp < self.height {
            let normal = (position - (self.vertex + self.axis * hp)).normalize();
            Some(HitRecord {
                t,
                position,
                normal,
                material: &self.material,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Color;

    fn lateral() -> Material {
        Material::lambert(Color::splat(0.3), Color::ZERO, Color::ZERO, 1.0)
    }

    fn cap() -> Material {
        Material::lambert(Color::splat(0.6), Color::ZERO, Color::ZERO, 1.0)
    }

    #[test]
    fn test_cylinder_lateral_round_trip() {
        let cylinder = Cylinder::new(lateral(), cap(), Vec3::ZERO, Vec3::Y, 1.0, 0.5);

        // Aim through a known point on the lateral surface at half height.
        let ray = Ray::new(Vec3::new(2.0, 0.5, 0.0), -Vec3::X);
        let hit = cylinder.intersect(&ray).expect("lateral hit");

        assert!((hit.t - 1.5).abs() < 1e-4);
        assert!((hit.position - Vec3::new(0.5, 0.5, 0.0)).length() < 1e-4);
        // Radial normal is perpendicular to the axis.
        assert!(hit.normal.dot(Vec3::Y).abs() < 1e-5);
        assert!((hit.normal - Vec3::X).length() < 1e-4);
        assert_eq!(hit.material.ambient, lateral().ambient);
    }

    #[test]
    fn test_cylinder_bottom_cap_fallback() {
        let cylinder = Cylinder::new(lateral(), cap(), Vec3::ZERO, Vec3::Y, 1.0, 1.0);

        // Slanted ray whose lateral-surface root projects below the base.
        let direction = Vec3::new(-2.0, -2.5, 0.0).normalize();
        let ray = Ray::new(Vec3::new(2.0, 0.5, 0.0), direction);
        let hit = cylinder.intersect(&ray).expect("cap hit");

        assert_eq!(hit.normal, Vec3::Y);
        assert!(hit.position.y.abs() < 1e-5);
        assert_eq!(hit.material.ambient, cap().ambient);
        assert!(hit.material.flat);
    }

    #[test]
    fn test_cylinder_cap_plane_sits_at_world_height_zero() {
        // An elevated horizontal stem, like the goblet stems in the demo
        // scene. Its cap plane is still y = 0, not the base height.
        let stem = Cylinder::new(
            lateral(),
            cap(),
            Vec3::new(-0.3, 0.339324, 0.200015),
            Vec3::new(1.0, 0.0, 0.000073),
            0.3,
            0.05,
        );

        // Straight down through the infinite tube behind the base (hp < 0).
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.200015), -Vec3::Y);
        let hit = stem.intersect(&ray).expect("cap hit");

        assert!((hit.t - 1.0).abs() < 1e-5);
        assert!(hit.position.y.abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
        assert_eq!(hit.material.ambient, cap().ambient);
    }

    #[test]
    fn test_cylinder_no_top_cap() {
        let cylinder = Cylinder::new(lateral(), cap(), Vec3::ZERO, Vec3::Y, 1.0, 0.5);

        // Lateral root projects above the height bound.
        let ray = Ray::new(Vec3::new(2.0, 1.5, 0.0), -Vec3::X);
        assert!(cylinder.intersect(&ray).is_none());
    }

    #[test]
    fn test_cylinder_epsilon_skips_self_intersection() {
        let cylinder = Cylinder::new(lateral(), cap(), Vec3::ZERO, Vec3::Y, 1.0, 0.5);

        // Origin exactly on the surface: the near root is within epsilon,
        // so the far side of the tube is returned instead.
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.0), -Vec3::X);
        let hit = cylinder.intersect(&ray).expect("far-side hit");
        assert!((hit.t - 1.0).abs() < 1e-4);
        assert!((hit.normal - -Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_cylinder_miss() {
        let cylinder = Cylinder::new(lateral(), cap(), Vec3::ZERO, Vec3::Y, 1.0, 0.5);
        let ray = Ray::new(Vec3::new(2.0, 0.5, 0.0), Vec3::Z);
        assert!(cylinder.intersect(&ray).is_none());
    }

    #[test]
    fn test_paraboloid_hit_from_demo_viewpoint() {
        // The demo scene's silver dome, seen from the demo camera.
        let dome = Paraboloid::new(
            lateral(),
            Vec3::new(0.0, 1.2, -0.1),
            Vec3::new(0.0, -1.0, 0.0),
            1.2,
        );
        let direction = (Vec3::new(0.0, -0.1, 0.0) - Vec3::new(0.0, 0.4, -1.0)).normalize();
        let ray = Ray::new(Vec3::new(0.0, 0.4, -1.0), direction);

        let hit = dome.intersect(&ray).expect("dome hit");
        assert!(hit.t > 0.6 && hit.t < 0.67, "t = {}", hit.t);
        // The front of the dome faces the camera.
        assert!(hit.normal.z < -0.99);
    }

    #[test]
    fn test_paraboloid_miss_behind() {
        let dome = Paraboloid::new(
            lateral(),
            Vec3::new(0.0, 1.2, -0.1),
            Vec3::new(0.0, -1.0, 0.0),
            1.2,
        );
        // Looking straight away from the dome.
        let ray = Ray::new(Vec3::new(0.0, 0.4, -1.0), -Vec3::Z);
        assert!(dome.intersect(&ray).is_none());
    }

    #[test]
    fn test_surface_enum_dispatch() {
        let surface = Surface::Cylinder(Cylinder::new(
            lateral(),
            cap(),
            Vec3::ZERO,
            Vec3::Y,
            1.0,
            0.5,
        ));
        let ray = Ray::new(Vec3::new(2.0, 0.5, 0.0), -Vec3::X);
        assert!(surface.intersect(&ray).is_some());
    }
}
