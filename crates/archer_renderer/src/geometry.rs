//! Geometric primitives: spheres and infinite planes.
//!
//! Intersection convention, shared by every primitive: `intersect` returns
//! `Some(distance)` with `distance > HIT_EPSILON`, measured along the unit
//! direction of the ray, or `None` for no hit. There is no numeric sentinel.

use crate::ConfigError;
use archer_math::{Interval, Ray, Vec3, VectorExt};

/// Minimum hit distance. Keeps scattered rays from re-hitting their origin.
pub const HIT_EPSILON: f32 = 1e-3;

/// Rays whose direction is closer than this to perpendicular with a plane's
/// normal are treated as parallel to it.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// The range of distances accepted by [`Geometry::intersect`].
pub const HIT_RANGE: Interval = Interval::new(HIT_EPSILON, f32::INFINITY);

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. The radius must be finite and positive.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Expects `ray` to have a unit direction.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let near = (-b - sqrtd) / (2.0 * a);
        if ray_t.surrounds(near) {
            return Some(near);
        }
        let far = (-b + sqrtd) / (2.0 * a);
        ray_t.surrounds(far).then_some(far)
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).safe_normalize()
    }
}

/// An infinite plane through `point` with a fixed unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized and must not be degenerate.
    pub fn new(point: Vec3, normal: Vec3) -> Result<Self, ConfigError> {
        let unit = normal.safe_normalize();
        if unit == Vec3::ZERO {
            return Err(ConfigError::DegenerateNormal(normal.to_array()));
        }
        Ok(Self { point, normal: unit })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Expects `ray` to have a unit direction.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = -(ray.origin() - self.point).dot(self.normal) / denom;
        ray_t.surrounds(t).then_some(t)
    }
}

/// Closed set of primitives a scene object can be made of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere(Sphere),
    Plane(Plane),
}

impl Geometry {
    /// Shorthand for `Sphere::new(..).map(Geometry::Sphere)`.
    pub fn sphere(center: Vec3, radius: f32) -> Result<Self, ConfigError> {
        Sphere::new(center, radius).map(Geometry::Sphere)
    }

    /// Shorthand for `Plane::new(..).map(Geometry::Plane)`.
    pub fn plane(point: Vec3, normal: Vec3) -> Result<Self, ConfigError> {
        Plane::new(point, normal).map(Geometry::Plane)
    }

    /// Distance along the ray to the nearest hit beyond [`HIT_EPSILON`].
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.intersect_within(ray, HIT_RANGE)
    }

    /// Distance to the nearest hit strictly inside `ray_t`.
    ///
    /// The ray direction is normalized first; a zero-length direction never hits.
    pub fn intersect_within(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let ray = ray.normalized();
        if ray.direction() == Vec3::ZERO {
            return None;
        }

        match self {
            Geometry::Sphere(sphere) => sphere.hit(&ray, ray_t),
            Geometry::Plane(plane) => plane.hit(&ray, ray_t),
        }
    }

    /// Unit surface normal at `point`.
    ///
    /// Spheres return the outward normal; planes return their fixed normal
    /// regardless of which side `point` is on.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Geometry::Sphere(sphere) => sphere.normal(point),
            Geometry::Plane(plane) => plane.normal,
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

impl From<Plane> for Geometry {
    fn from(plane: Plane) -> Self {
        Geometry::Plane(plane)
    }
}
