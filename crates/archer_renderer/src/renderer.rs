//! Core path tracing renderer.
//!
//! Per pixel and sample, a path is traced from the camera through at most
//! `max_bounces` surface hits, recording each hit. The path is then shaded by
//! folding the hit materials back to front, starting from the terminal event:
//! the background for an escaping ray, black otherwise. Samples are averaged
//! and clamped into the framebuffer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::material::{Color, BLACK};
use crate::sampler::sample_rng;
use crate::scene::ObjectId;
use crate::{Camera, ConfigError, Framebuffer, RenderError, RenderResult, Scene};
use archer_math::{Ray, UVec2, Vec3, VectorExt};
use rand::RngCore;
use rayon::prelude::*;

/// How buckets are dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Buckets in parallel on the global rayon pool
    #[default]
    Multithreaded,
    /// Buckets one after another on the calling thread
    Monothreaded,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing (at least 1)
    pub samples_per_pixel: u32,
    /// Maximum number of surface hits per path; 0 shades the first hit only
    pub max_bounces: u32,
    /// Seed for all jitter and scattering
    pub seed: u64,
    /// Edge length of a render bucket in pixels (at least 1)
    pub bucket_size: u32,
    pub execution: ExecutionMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            max_bounces: 4,
            seed: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            execution: ExecutionMode::default(),
        }
    }
}

impl RenderConfig {
    /// Create a config with the given quality settings and defaults otherwise.
    pub fn new(samples_per_pixel: u32, max_bounces: u32) -> Result<Self, ConfigError> {
        let config = Self {
            samples_per_pixel,
            max_bounces,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how buckets are dispatched.
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Check the invariants `new` enforces; fields are public and may have
    /// been changed since.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        Ok(())
    }
}

/// One surface hit along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceRecord {
    pub hit_point: Vec3,
    pub normal: Vec3,
    pub object_id: ObjectId,
    pub incoming_ray: Ray,
    /// `None` if the material ended the path or no bounce budget was left to scatter
    pub outgoing_ray: Option<Ray>,
}

/// Why a path stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathTermination {
    /// The ray left the scene and sees the background
    Escaped(Ray),
    /// The bounce budget ran out
    DepthLimit,
    /// The last hit material does not scatter
    Absorbed,
}

/// A traced path, ready to be shaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedPath {
    pub records: Vec<BounceRecord>,
    pub termination: PathTermination,
}

/// Trace `ray` through `scene`, recording up to `max(max_bounces, 1)` hits.
///
/// With `max_bounces == 0` the first hit is recorded without scattering.
pub fn trace_path(
    ray: Ray,
    scene: &Scene,
    max_bounces: u32,
    rng: &mut dyn RngCore,
) -> TracedPath {
    let max_records = max_bounces.max(1) as usize;
    let mut records = Vec::with_capacity(max_records);
    let mut ray = ray;

    let termination = loop {
        let Some((object, distance)) = scene.nearest_hit(&ray) else {
            break PathTermination::Escaped(ray);
        };

        // Distances are measured along the unit direction
        let hit_point = ray.origin() + ray.direction().safe_normalize() * distance;
        let normal = object.geometry.normal(hit_point);
        let outgoing_ray = if max_bounces == 0 {
            None
        } else {
            object.material.scatter(&ray, hit_point, normal, rng)
        };

        records.push(BounceRecord {
            hit_point,
            normal,
            object_id: object.id,
            incoming_ray: ray,
            outgoing_ray,
        });

        if records.len() >= max_records {
            break PathTermination::DepthLimit;
        }
        match outgoing_ray {
            Some(next) => ray = next,
            None => break PathTermination::Absorbed,
        }
    };

    TracedPath { records, termination }
}

/// Fold a traced path into a single color, last hit first.
pub fn shade_path(path: &TracedPath, scene: &Scene) -> Color {
    let start = match path.termination {
        PathTermination::Escaped(ray) => scene
            .background()
            .shade(BLACK, &ray, None, ray.origin(), Vec3::ZERO),
        PathTermination::DepthLimit | PathTermination::Absorbed => BLACK,
    };

    path.records.iter().rev().fold(start, |accumulated, record| {
        match scene.get(record.object_id) {
            Some(object) => object.material.shade(
                accumulated,
                &record.incoming_ray,
                record.outgoing_ray.as_ref(),
                record.hit_point,
                record.normal,
            ),
            // Records only refer to objects of the scene they were traced in
            None => accumulated,
        }
    })
}

/// Color of one sample of pixel (x, y).
pub fn render_sample(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    sample: u32,
    config: &RenderConfig,
) -> Color {
    let mut rng = sample_rng(config.seed, x, y, sample);
    let ray = camera.get_ray(UVec2::new(x, y), &mut rng);
    let path = trace_path(ray, scene, config.max_bounces, &mut rng);
    shade_path(&path, scene)
}

/// Render a single pixel: the component-wise mean of all its samples.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let mut pixel_color = Color::ZERO;

    for sample in 0..config.samples_per_pixel {
        pixel_color += render_sample(camera, scene, x, y, sample, config);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Render the scene to a new framebuffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<Framebuffer> {
    render_with_cancel(camera, scene, config, &AtomicBool::new(false))
}

/// Render the scene, checking `cancel` before each bucket is started.
///
/// Buckets already in flight finish; the partial image is discarded and
/// [`RenderError::Cancelled`] is returned.
pub fn render_with_cancel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> RenderResult<Framebuffer> {
    config.validate()?;

    let (width, height) = (camera.width(), camera.height());
    log::info!(
        "Rendering {}x{} @ {} spp, {} bounces, {} objects ({:?})",
        width,
        height,
        config.samples_per_pixel,
        config.max_bounces,
        scene.len(),
        config.execution
    );
    let start = Instant::now();

    let buckets = generate_buckets(width, height, config.bucket_size);
    let render_one = |bucket: &Bucket| -> Option<BucketResult> {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        Some(render_bucket(bucket, camera, scene, config))
    };

    let results: Option<Vec<BucketResult>> = match config.execution {
        ExecutionMode::Multithreaded => buckets.par_iter().map(render_one).collect(),
        ExecutionMode::Monothreaded => buckets.iter().map(render_one).collect(),
    };

    let Some(results) = results else {
        log::warn!("Render cancelled after {:?}", start.elapsed());
        return Err(RenderError::Cancelled);
    };

    let mut framebuffer = Framebuffer::new(width, height);
    for result in &results {
        framebuffer.write_bucket(result);
    }

    log::info!("Rendered {} buckets in {:?}", results.len(), start.elapsed());
    Ok(framebuffer)
}
