// Re-export glam for convenience
pub use glam::*;

// Archer math types
mod interval;
mod ray;
mod rotation;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use rotation::rotation_matrix;
pub use vector::{VectorExt, NORMALIZE_EPSILON};
