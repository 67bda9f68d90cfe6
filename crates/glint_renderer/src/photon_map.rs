//! Grid-based photon map accumulator.
//!
//! A fixed-resolution 2D grid over the world's x/z plane. The emission pass
//! splats photon power into cells; the shading pass sums a small cell
//! neighborhood around each hit. This trades the bias of a blurred deposit
//! for a gather step that is a plain array walk, instead of a kd-tree
//! nearest-photon query.

use glint_core::{Color, Vec3};

/// World-space half-extent mapped onto the grid: x and z in [-3, 3].
const WORLD_EXTENT: f32 = 3.0;

/// Cell-offset radius shared by the deposit splat and the gather.
const NEIGHBORHOOD_RADIUS: i32 = 5;

/// Accumulated light-power deposits on a square grid.
///
/// Written only during the emission pass, read only during shading; the two
/// phases never interleave.
pub struct PhotonMap {
    size: i32,
    cells: Vec<Color>,
}

impl PhotonMap {
    /// Create an empty map with `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size: size as i32,
            cells: vec![Color::ZERO; size * size],
        }
    }

    /// Grid resolution along one side.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Project a world position onto grid coordinates (may be out of range).
    fn cell_of(&self, position: Vec3) -> (i32, i32) {
        let half = (self.size / 2) as f32;
        let ix = (position.x / WORLD_EXTENT * half + half) as i32;
        let iy = (position.z / WORLD_EXTENT * half + half) as i32;
        (ix, iy)
    }

    fn index(&self, ix: i32, iy: i32) -> Option<usize> {
        if ix < 0 || iy < 0 || ix >= self.size || iy >= self.size {
            return None;
        }
        Some((iy * self.size + ix) as usize)
    }

    /// Splat a photon's power around the cell containing `position`.
    ///
    /// The exact cell receives the full power; every neighbor within the
    /// offset window whose center lies closer than the neighborhood radius
    /// receives half. Out-of-range cells are skipped.
    pub fn deposit(&mut self, position: Vec3, power: Color) {
        let (cx, cy) = self.cell_of(position);

        for dy in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
            for dx in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
                if dx * dx + dy * dy >= NEIGHBORHOOD_RADIUS * NEIGHBORHOOD_RADIUS {
                    continue;
                }
                if let Some(i) = self.index(cx + dx, cy + dy) {
                    if dx == 0 && dy == 0 {
                        self.cells[i] += power;
                    } else {
                        self.cells[i] += power / 2.0;
                    }
                }
            }
        }
    }

    /// Sum the deposits in the neighborhood of `position`.
    ///
    /// Uses the same offset window as [`deposit`](Self::deposit), center
    /// cell included; out-of-range cells contribute nothing.
    pub fn gather(&self, position: Vec3) -> Color {
        let (cx, cy) = self.cell_of(position);
        let mut sum = Color::ZERO;

        for dy in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
            for dx in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
                if dx * dx + dy * dy >= NEIGHBORHOOD_RADIUS * NEIGHBORHOOD_RADIUS {
                    continue;
                }
                if let Some(i) = self.index(cx + dx, cy + dy) {
                    sum += self.cells[i];
                }
            }
        }

        sum
    }

    /// Total power accumulated over the whole grid.
    pub fn total_power(&self) -> Color {
        self.cells.iter().copied().sum()
    }
}
