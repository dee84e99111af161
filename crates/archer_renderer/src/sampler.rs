//! Random number sources for jitter and scattering.
//!
//! Randomness is counter-based: every `(seed, x, y, sample)` tuple gets its own
//! freshly seeded generator. Workers never share generator state, and a render
//! only depends on its inputs and the seed, not on scheduling.

use std::hash::{DefaultHasher, Hash, Hasher};

use archer_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Build the generator for one sample of one pixel.
pub fn sample_rng(seed: u64, x: u32, y: u32, sample: u32) -> StdRng {
    let mut hasher = DefaultHasher::new();
    (seed, x, y, sample).hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform point in the unit cube `[0, 1)^3`.
#[inline]
pub fn random_unit_cube(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}

/// Uniform direction on the unit sphere.
///
/// Rejection-samples the unit ball before normalizing, so directions are
/// uniform over the sphere rather than biased towards the cube's corners.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let v = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rng_is_deterministic() {
        let mut a = sample_rng(7, 10, 20, 3);
        let mut b = sample_rng(7, 10, 20, 3);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_sample_rng_streams_differ() {
        let first = sample_rng(0, 1, 2, 0).next_u64();
        assert_ne!(first, sample_rng(0, 1, 2, 1).next_u64());
        assert_ne!(first, sample_rng(0, 2, 1, 0).next_u64());
        assert_ne!(first, sample_rng(1, 1, 2, 0).next_u64());
    }

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_unit_vector_is_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_random_unit_vector_is_uniform_on_sphere() {
        // On a uniform sphere every band of equal height holds the same
        // share of points, so |z| > 0.9 should be hit 10% of the time.
        let mut rng = StdRng::seed_from_u64(1234);
        let n = 20_000;
        let mut polar = 0;
        let mut mean = Vec3::ZERO;
        for _ in 0..n {
            let v = random_unit_vector(&mut rng);
            if v.z.abs() > 0.9 {
                polar += 1;
            }
            mean += v;
        }
        let fraction = polar as f32 / n as f32;
        assert!((fraction - 0.1).abs() < 0.015, "polar fraction was {fraction}");

        mean /= n as f32;
        assert!(mean.length() < 0.03, "mean direction was {:?}", mean);
    }
}
