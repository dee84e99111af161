use crate::{Vec3, VectorExt};

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not required to be unit length. Geometry normalizes it
/// before intersecting so that hit distances are world-space lengths.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same origin, unit-length direction.
    ///
    /// A degenerate direction becomes the zero vector (see [`VectorExt::safe_normalize`]).
    #[inline]
    pub fn normalized(&self) -> Ray {
        Ray::new(self.origin, self.direction.safe_normalize())
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}
