//! Frame buffer and tone mapping.

use std::path::Path;

use glint_core::Color;
use thiserror::Error;

/// Target key value for the global tone-mapping normalization.
const TARGET_ALPHA: f32 = 0.65;

/// Luminance weights (Rec. 601-style) used by the tone mapper.
const LUMA: [f32; 3] = [0.21, 0.72, 0.07];

/// Errors that can occur when exporting a frame.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type FrameResult<T> = Result<T, FrameError>;

/// A row-major RGB float image.
///
/// One (r, g, b) triple per pixel, unbounded until tone mapping. Written
/// once per pixel during rendering, then rescaled in place.
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<f32>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; (width * height * 3) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        let i = ((y * self.width + x) * 3) as usize;
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = ((y * self.width + x) * 3) as usize;
        self.data[i] = color.x;
        self.data[i + 1] = color.y;
        self.data[i + 2] = color.z;
    }

    /// The flat row-major RGB channel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the channel data, for sharding rows across
    /// workers.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Global tone mapping: scale every channel by `TARGET_ALPHA` over the
    /// frame's average luminance.
    ///
    /// Normalizing by the buffer's own average makes the result invariant
    /// to absolute exposure. An all-black frame is left untouched.
    pub fn tone_map(&mut self) {
        let mut total = 0.0f32;
        for pixel in self.data.chunks_exact(3) {
            total += LUMA[0] * pixel[0] + LUMA[1] * pixel[1] + LUMA[2] * pixel[2];
        }

        let average = total / (self.width * self.height) as f32;
        if average <= 0.0 {
            return;
        }

        let scale = TARGET_ALPHA / average;
        for channel in &mut self.data {
            *channel *= scale;
        }
    }

    /// Convert to 8-bit RGB, clamping to [0, 1].
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&channel| (255.0 * channel.clamp(0.0, 1.0)) as u8)
            .collect()
    }

    /// Save the (tone-mapped) frame as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> FrameResult<()> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8())
            .expect("buffer dimensions match");
        img.save(path.as_ref())?;
        Ok(())
    }
}
