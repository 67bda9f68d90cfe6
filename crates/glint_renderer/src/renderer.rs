//! Render entry point: photon emission, per-pixel tracing, tone mapping.

use glint_core::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::framebuffer::FrameBuffer;
use crate::photon_map::PhotonMap;
use crate::tracer::{emit_photons, trace};

/// Render configuration.
///
/// The frame resolution comes from the scene's camera; the config carries
/// the photon-map parameters.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Total photons emitted during the caustics pass, split evenly
    /// across the scene's lights
    pub photon_budget: u32,
    /// Photon map resolution along one side
    pub map_size: usize,
    /// Whether to run the photon emission pass at all
    pub caustics: bool,
    /// Seed for the emission directions, for reproducible renders
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            photon_budget: 10_000,
            map_size: 1000,
            caustics: true,
            seed: 0,
        }
    }
}

/// Render a frame: emit photons (when enabled), trace one ray per pixel,
/// then tone map the result.
///
/// The emission pass completes before any pixel is traced; afterwards the
/// scene and photon map are shared immutably across the row workers.
pub fn render(scene: &Scene, config: &RenderConfig) -> FrameBuffer {
    let width = scene.camera.image_width;
    let height = scene.camera.image_height;

    let mut map = PhotonMap::new(config.map_size);
    if config.caustics {
        let start = std::time::Instant::now();
        let mut rng = StdRng::seed_from_u64(config.seed);
        emit_photons(scene, &mut map, config.photon_budget, &mut rng);
        log::info!("photon emission took {:?}", start.elapsed());
    }
    let map = &map;

    let start = std::time::Instant::now();
    let mut frame = FrameBuffer::new(width, height);
    frame
        .data_mut()
        .par_chunks_mut((width * 3) as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let ray = scene.camera.primary_ray(x, y as u32);
                let color = trace(scene, map, &ray, 0);
                let i = (x * 3) as usize;
                row[i] = color.x;
                row[i + 1] = color.y;
                row[i + 2] = color.z;
            }
        });
    log::info!("traced {}x{} pixels in {:?}", width, height, start.elapsed());

    frame.tone_map();
    frame
}
