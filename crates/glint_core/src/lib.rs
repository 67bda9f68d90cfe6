//! Glint Core - Scene model for the photon-map caustics ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: Phong shading with Schlick-Fresnel reflectance,
//!   reflection and refraction direction formulas
//! - **Surfaces**: capped cylinder and paraboloid primitives with
//!   closed-form ray intersection
//! - **Scene types**: `Light`, pinhole `Camera`, and the `Scene`
//!   aggregate with its nearest-hit query
//! - **Demo scene**: the fixed metallic/glass still-life configuration
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{build_demo_scene, Scene};
//!
//! let scene = build_demo_scene();
//! let ray = scene.camera.primary_ray(300, 300);
//! if let Some(hit) = scene.nearest_hit(&ray) {
//!     println!("hit at t = {}", hit.t);
//! }
//! ```

pub mod camera;
pub mod demo;
pub mod light;
pub mod material;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use camera::Camera;
pub use demo::build_demo_scene;
pub use light::Light;
pub use material::{reflect, Color, Material};
pub use scene::Scene;
pub use surface::{Cylinder, HitRecord, Paraboloid, Surface, EPSILON};

/// Re-export Vec3 and the Ray type from glint_math
pub use glint_math::{Ray, Vec3};
