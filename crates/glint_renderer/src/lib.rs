//! Glint Renderer - recursive ray tracing with photon-map caustics.
//!
//! A two-pass renderer: photon emission populates a grid-based photon map,
//! then one ray per pixel is traced recursively (direct lighting, shadows,
//! caustic gather, Fresnel-weighted reflection and refraction), and the
//! frame is tone mapped by its own average luminance.

mod framebuffer;
mod photon_map;
mod renderer;
mod tracer;

pub use framebuffer::{FrameBuffer, FrameError, FrameResult};
pub use photon_map::PhotonMap;
pub use renderer::{render, RenderConfig};
pub use tracer::{checker, deposit_walk, emit_photons, trace, MAX_DEPTH};

/// Re-export the scene model and math types
pub use glint_core::{build_demo_scene, Color, Scene};
pub use glint_math::{Ray, Vec3};
