// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
pub use ray::Ray;
