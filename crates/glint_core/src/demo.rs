//! The fixed demo scene: metallic and glass still life under three
//! colored point lights.
//!
//! All parameters are literal configuration, carried over from the
//! reference picture this renderer reproduces.

use glint_math::Vec3;

use crate::camera::Camera;
use crate::light::Light;
use crate::material::{Color, Material};
use crate::scene::Scene;
use crate::surface::{Cylinder, Paraboloid, Surface};

/// Demo frame resolution (square).
pub const DEMO_RESOLUTION: u32 = 600;

fn brown() -> Material {
    Material::lambert(
        Color::new(0.4, 0.2, 0.0),
        Color::new(0.4, 0.2, 0.0),
        Color::splat(8.0),
        80.0,
    )
}

fn gold() -> Material {
    Material::metal(
        Color::splat(0.192),
        Color::new(0.17, 0.35, 1.5),
        Color::new(3.1, 2.7, 1.9),
    )
}

fn silver() -> Material {
    Material::metal(
        Color::splat(0.192),
        Color::new(0.14, 0.16, 0.13),
        Color::new(4.1, 2.3, 3.1),
    )
}

fn glass() -> Material {
    Material::glass(1.5)
}

/// Build the demo scene: a checkered table, gold and glass goblets with
/// crossed stems, and a silver dome, lit by red, green and blue points.
pub fn build_demo_scene() -> Scene {
    let camera = Camera::look_at(
        Vec3::new(0.0, 0.4, -1.0),
        Vec3::new(0.0, -0.1, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        DEMO_RESOLUTION,
        DEMO_RESOLUTION,
    );

    let surfaces = vec![
        // Zero-height cylinder: its bottom-cap plane is the table.
        Surface::Cylinder(Cylinder::new(
            gold(),
            brown(),
            Vec3::new(0.0, 0.0, 1.5),
            Vec3::Y,
            0.0,
            3.0,
        )),
        // Goblet bodies
        Surface::Cylinder(Cylinder::new(
            gold(),
            brown(),
            Vec3::new(-0.5, 0.0, 0.2),
            Vec3::Y,
            0.7,
            0.2,
        )),
        Surface::Cylinder(Cylinder::new(
            glass(),
            brown(),
            Vec3::new(0.5, 0.0, 0.2),
            Vec3::Y,
            0.9,
            0.15,
        )),
        // Crossed gold stems
        Surface::Cylinder(Cylinder::new(
            gold(),
            gold(),
            Vec3::new(-0.3, 0.339324, 0.200015),
            Vec3::new(1.0, 0.0, 0.000073),
            0.3,
            0.05,
        )),
        Surface::Cylinder(Cylinder::new(
            gold(),
            gold(),
            Vec3::new(-0.7, 0.156781, 0.199909),
            Vec3::new(-1.0, 0.0, 0.000456),
            0.3,
            0.05,
        )),
        Surface::Cylinder(Cylinder::new(
            gold(),
            gold(),
            Vec3::new(-0.15, 0.339324, 0.200015),
            Vec3::Y,
            0.15,
            0.03,
        )),
        Surface::Cylinder(Cylinder::new(
            gold(),
            gold(),
            Vec3::new(-0.85, 0.156781, 0.199909),
            Vec3::Y,
            0.25,
            0.03,
        )),
        // Glass stems
        Surface::Cylinder(Cylinder::new(
            glass(),
            gold(),
            Vec3::new(0.35, 0.440651, 0.200176),
            Vec3::new(-1.0, 0.0, 0.001175),
            0.3,
            0.05,
        )),
        Surface::Cylinder(Cylinder::new(
            glass(),
            gold(),
            Vec3::new(0.2, 0.495651, 0.200176),
            Vec3::Y,
            0.15,
            0.03,
        )),
        // Silver dome hanging over the table
        Surface::Paraboloid(Paraboloid::new(
            silver(),
            Vec3::new(0.0, 1.2, -0.1),
            Vec3::new(0.0, -1.0, 0.0),
            1.2,
        )),
    ];

    let lights = vec![
        Light::new(Vec3::new(3.0, 5.0, 3.0) * 1.5, Color::new(0.3, 0.0, 0.0) * 500.0),
        Light::new(Vec3::new(0.0, 5.0, 1.0) * 1.5, Color::new(0.0, 0.3, 0.0) * 500.0),
        Light::new(Vec3::new(-3.0, 5.0, 3.0) * 1.5, Color::new(0.0, 0.0, 0.3) * 500.0),
    ];

    log::debug!(
        "demo scene: {} surfaces, {} lights",
        surfaces.len(),
        lights.len()
    );

    Scene {
        surfaces,
        lights,
        ambient: Color::splat(0.2),
        sky: Color::new(0.0, 0.5, 1.0),
        camera,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_shape() {
        let scene = build_demo_scene();
        assert_eq!(scene.surfaces.len(), 10);
        assert_eq!(scene.lights.len(), 3);
        assert_eq!(scene.camera.image_width, DEMO_RESOLUTION);
    }

    #[test]
    fn test_demo_scene_center_ray_hits_something() {
        let scene = build_demo_scene();
        let ray = scene.camera.primary_ray(300, 300);
        assert!(scene.nearest_hit(&ray).is_some());
    }

    #[test]
    fn test_demo_materials_transport_flags() {
        let scene = build_demo_scene();
        let domes = scene
            .surfaces
            .iter()
            .filter(|s| matches!(s, Surface::Paraboloid(_)));
        // The silver dome is the only paraboloid.
        assert_eq!(domes.count(), 1);

        assert!(gold().reflective && !gold().refractive);
        assert!(glass().refractive && !glass().reflective);
        assert!(!brown().reflective && !brown().refractive);
    }
}
