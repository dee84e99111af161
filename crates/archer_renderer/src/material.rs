//! Surface materials.
//!
//! A material does two things: `scatter` picks the continuation ray after a
//! hit (or ends the path), and `shade` composites a color during the
//! back-to-front fold over a finished path.

use crate::sampler::random_unit_vector;
use archer_math::{Ray, Vec3, VectorExt};
use rand::RngCore;

/// Color type alias (RGB channels in the 0-255 range)
pub type Color = Vec3;

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 255.0);

/// Closed set of surface materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Constant color, ends the path.
    Solid { color: Color },
    /// Scatters uniformly over the hemisphere facing the incoming ray and
    /// shades with its albedo color.
    Diffuse { color: Color },
    /// Vertical gradient from `bottom` (looking down) to `top` (looking up).
    /// Used as the scene background; ends the path.
    Sky { bottom: Color, top: Color },
    /// Perfect reflector, passes the color from further along the path through.
    Mirror,
    /// Visualizes the surface normal, ends the path.
    Normal,
}

impl Material {
    pub const fn solid(color: Color) -> Self {
        Material::Solid { color }
    }

    pub const fn diffuse(color: Color) -> Self {
        Material::Diffuse { color }
    }

    /// The default white-to-blue sky.
    pub const fn sky() -> Self {
        Material::Sky {
            bottom: WHITE,
            top: BLUE,
        }
    }

    pub const fn sky_gradient(bottom: Color, top: Color) -> Self {
        Material::Sky { bottom, top }
    }

    /// True if `scatter` never continues the path.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Material::Solid { .. } | Material::Sky { .. } | Material::Normal
        )
    }

    /// Continuation ray leaving `hit_point`, or `None` if the path ends here.
    pub fn scatter(
        &self,
        incoming: &Ray,
        hit_point: Vec3,
        normal: Vec3,
        rng: &mut dyn RngCore,
    ) -> Option<Ray> {
        match self {
            Material::Diffuse { .. } => {
                // Don't scatter into the object: stay on the side the ray came from
                let facing = if normal.dot(incoming.direction()) > 0.0 {
                    -normal
                } else {
                    normal
                };
                let mut direction = random_unit_vector(rng);
                if facing.dot(direction) < 0.0 {
                    direction = -direction;
                }
                Some(Ray::new(hit_point, direction))
            }
            Material::Mirror => {
                let direction = incoming.direction().safe_normalize().reflect(normal);
                Some(Ray::new(hit_point, direction))
            }
            Material::Solid { .. } | Material::Sky { .. } | Material::Normal => None,
        }
    }

    /// Color of this surface given the fold result from further along the path.
    pub fn shade(
        &self,
        accumulated: Color,
        incoming: &Ray,
        _outgoing: Option<&Ray>,
        _hit_point: Vec3,
        normal: Vec3,
    ) -> Color {
        match *self {
            Material::Solid { color } | Material::Diffuse { color } => color,
            Material::Sky { bottom, top } => {
                let t = 0.5 * (incoming.direction().safe_normalize().y + 1.0);
                bottom * (1.0 - t) + top * t
            }
            Material::Mirror => accumulated,
            Material::Normal => 0.5 * (normal + Vec3::ONE) * 255.0,
        }
    }
}
