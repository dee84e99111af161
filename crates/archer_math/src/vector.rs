// Vector utilities on top of glam::Vec3
//
// glam already provides add/sub/mul/div/dot/length. This adds the pieces the
// renderer needs with pinned numerical behavior.

use glam::Vec3;

use crate::rotation_matrix;

/// Lengths below this are treated as zero by [`VectorExt::safe_normalize`].
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Extension trait for Vec3 used throughout the renderer.
pub trait VectorExt {
    /// Normalize, returning the zero vector when the length is below
    /// [`NORMALIZE_EPSILON`] or not finite. Never produces NaN.
    fn safe_normalize(self) -> Vec3;

    /// Rotate by Euler angles (radians) using the composed matrix
    /// `Rz · Ry · Rx` (see [`rotation_matrix`]).
    fn rotate_euler(self, rotation: Vec3) -> Vec3;

    /// Mirror reflection about a unit normal.
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl VectorExt for Vec3 {
    fn safe_normalize(self) -> Vec3 {
        let length = self.length();
        if !length.is_finite() || length < NORMALIZE_EPSILON {
            return Vec3::ZERO;
        }
        self / length
    }

    fn rotate_euler(self, rotation: Vec3) -> Vec3 {
        rotation_matrix(rotation) * self
    }

    #[inline]
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - 2.0 * self.dot(normal) * normal
    }
}
