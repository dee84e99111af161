//! Camera for ray generation.

use crate::sampler::{random_unit_cube, sample_rng};
use crate::ConfigError;
use archer_math::{rotation_matrix, Mat3, Ray, UVec2, Vec3, VectorExt};
use rand::RngCore;

/// Pinhole camera looking down its local -Z axis.
///
/// Orientation is given as Euler angles in radians and applied with the
/// `Rz · Ry · Rx` convention from [`rotation_matrix`].
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3,
    resolution: UVec2,
    fov: f32,    // Vertical field of view in degrees
    dither: f32, // Anti-aliasing jitter applied to ray directions

    // Cached values derived from the settings above
    basis: Mat3,
    aspect_ratio: f32,
    tan_half_fov: f32,
}

impl Camera {
    /// Create a camera at the origin with no rotation and no dither.
    ///
    /// Fails if either dimension is zero or `fov` is outside `(0, 180)`.
    pub fn new(width: u32, height: u32, fov: f32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidResolution { width, height });
        }
        if !(fov > 0.0 && fov < 180.0) {
            return Err(ConfigError::InvalidFov(fov));
        }

        Ok(Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            resolution: UVec2::new(width, height),
            fov,
            dither: 0.0,
            basis: Mat3::IDENTITY,
            aspect_ratio: width as f32 / height as f32,
            tan_half_fov: (fov.to_radians() / 2.0).tan(),
        })
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set camera rotation (Euler angles, radians).
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self.basis = rotation_matrix(rotation);
        self
    }

    /// Set the anti-aliasing dither amount.
    pub fn with_dither(mut self, dither: f32) -> Result<Self, ConfigError> {
        if !dither.is_finite() || dither < 0.0 {
            return Err(ConfigError::InvalidDither(dither));
        }
        self.dither = dither;
        Ok(self)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn resolution(&self) -> UVec2 {
        self.resolution
    }

    pub fn width(&self) -> u32 {
        self.resolution.x
    }

    pub fn height(&self) -> u32 {
        self.resolution.y
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn dither(&self) -> f32 {
        self.dither
    }

    /// Generate the ray through `pixel`, jittered by `rng`.
    ///
    /// The jitter moves only the direction; every ray starts at the camera
    /// position. With zero dither `rng` is never touched.
    pub fn get_ray(&self, pixel: UVec2, rng: &mut dyn RngCore) -> Ray {
        let res = self.resolution.as_vec2();
        let ndc_x = 2.0 * pixel.x as f32 / res.x - 1.0;
        let ndc_y = 1.0 - 2.0 * pixel.y as f32 / res.y;

        let screen_x = ndc_x * self.aspect_ratio * self.tan_half_fov;
        let screen_y = ndc_y * self.tan_half_fov;

        let mut direction = Vec3::new(screen_x, screen_y, -1.0);
        if self.dither > 0.0 {
            direction += self.dither * random_unit_cube(rng);
        }

        Ray::new(self.position, (self.basis * direction).safe_normalize())
    }

    /// Generate the ray for one sample of `pixel`, jittered from the
    /// counter-based stream for `(seed, pixel, sample)`.
    pub fn get_ray_seeded(&self, pixel: UVec2, seed: u64, sample: u32) -> Ray {
        let mut rng = sample_rng(seed, pixel.x, pixel.y, sample);
        self.get_ray(pixel, &mut rng)
    }

    /// Eagerly generate one ray per pixel, row-major.
    ///
    /// Jitter for pixel `(x, y)` comes from sample 0 of `seed`, so the grid
    /// matches what the renderer traces for its first sample.
    pub fn cook_rays(&self, seed: u64) -> Vec<Ray> {
        let mut rays = Vec::with_capacity((self.width() * self.height()) as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                rays.push(self.get_ray_seeded(UVec2::new(x, y), seed, 0));
            }
        }
        rays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "expected {:?}, got {:?}", b, a);
    }

    #[test]
    fn test_camera_rejects_bad_config() {
        assert_eq!(
            Camera::new(0, 64, 60.0).unwrap_err(),
            ConfigError::InvalidResolution { width: 0, height: 64 }
        );
        assert_eq!(
            Camera::new(64, 0, 60.0).unwrap_err(),
            ConfigError::InvalidResolution { width: 64, height: 0 }
        );
        assert!(matches!(Camera::new(64, 64, 0.0), Err(ConfigError::InvalidFov(_))));
        assert!(matches!(Camera::new(64, 64, 180.0), Err(ConfigError::InvalidFov(_))));
        assert!(matches!(Camera::new(64, 64, f32::NAN), Err(ConfigError::InvalidFov(_))));

        let camera = Camera::new(64, 64, 60.0).unwrap();
        assert!(matches!(camera.clone().with_dither(-0.1), Err(ConfigError::InvalidDither(_))));
        assert!(matches!(camera.with_dither(f32::INFINITY), Err(ConfigError::InvalidDither(_))));
    }

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = Camera::new(64, 64, 60.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(UVec2::new(32, 32), &mut rng);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_vec_eq(ray.direction, Vec3::NEG_Z);
    }

    #[test]
    fn test_corner_ray_matches_field_of_view() {
        let camera = Camera::new(64, 32, 90.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        // Top-left pixel: ndc = (-1, 1), aspect 2, tan(45deg) = 1
        let ray = camera.get_ray(UVec2::new(0, 0), &mut rng);
        assert_vec_eq(ray.direction, Vec3::new(-2.0, 1.0, -1.0).normalize());
    }

    #[test]
    fn test_rotation_turns_view_direction() {
        let camera = Camera::new(64, 64, 60.0)
            .unwrap()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(UVec2::new(32, 32), &mut rng);
        assert_eq!(ray.origin, Vec3::new(1.0, 2.0, 3.0));
        assert_vec_eq(ray.direction, Vec3::NEG_X);
    }

    #[test]
    fn test_dither_jitters_direction_only() {
        let camera = Camera::new(64, 64, 60.0)
            .unwrap()
            .with_position(Vec3::new(0.0, 1.0, 0.0))
            .with_dither(0.05)
            .unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let a = camera.get_ray(UVec2::new(32, 32), &mut rng);
        let b = camera.get_ray(UVec2::new(32, 32), &mut rng);

        assert_eq!(a.origin, camera.position());
        assert_eq!(b.origin, camera.position());
        assert_ne!(a.direction, b.direction);
        assert!((a.direction.length() - 1.0).abs() < 1e-5);

        // Jitter stays small relative to the pixel's base direction
        assert!(a.direction.dot(Vec3::NEG_Z) > 0.99);
    }

    #[test]
    fn test_zero_dither_is_deterministic() {
        let camera = Camera::new(16, 16, 45.0).unwrap();
        let a = camera.get_ray(UVec2::new(3, 9), &mut StdRng::seed_from_u64(1));
        let b = camera.get_ray(UVec2::new(3, 9), &mut StdRng::seed_from_u64(2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_cook_rays_matches_on_demand_rays() {
        let camera = Camera::new(8, 4, 60.0).unwrap().with_dither(0.01).unwrap();
        let rays = camera.cook_rays(99);

        assert_eq!(rays.len(), 32);
        let (x, y) = (5, 2);
        let expected = camera.get_ray(UVec2::new(x, y), &mut sample_rng(99, x, y, 0));
        assert_eq!(rays[(y * 8 + x) as usize], expected);
    }

    #[test]
    fn test_seeded_rays_depend_on_sample() {
        let camera = Camera::new(8, 8, 60.0).unwrap().with_dither(0.05).unwrap();
        let pixel = UVec2::new(4, 4);

        assert_eq!(camera.get_ray_seeded(pixel, 3, 1), camera.get_ray_seeded(pixel, 3, 1));
        assert_ne!(camera.get_ray_seeded(pixel, 3, 1), camera.get_ray_seeded(pixel, 3, 2));
        assert_ne!(camera.get_ray_seeded(pixel, 3, 1), camera.get_ray_seeded(pixel, 4, 1));
    }
}
