//! Archer - CPU path tracing
//!
//! A small Monte Carlo path tracer over analytic primitives. Paths are traced
//! from a pinhole camera through a flat scene of spheres and planes, shaded by
//! folding the materials they hit, and written into an 8-bit framebuffer.
//!
//! Rendering is split into buckets that are dispatched with rayon. Every
//! sample draws from its own seeded stream, so an image depends only on the
//! scene, the camera and the [`RenderConfig`], never on scheduling.

mod bucket;
mod camera;
mod error;
mod framebuffer;
mod geometry;
mod material;
mod renderer;
mod sampler;
mod scene;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{ConfigError, RenderError, RenderResult};
pub use framebuffer::{color_to_rgb, Framebuffer};
pub use geometry::{Geometry, Plane, Sphere, HIT_EPSILON};
pub use material::{Color, Material, BLACK, BLUE, WHITE};
pub use renderer::{
    render, render_pixel, render_sample, render_with_cancel, shade_path, trace_path,
    BounceRecord, ExecutionMode, PathTermination, RenderConfig, TracedPath,
};
pub use sampler::sample_rng;
pub use scene::{Intersection, ObjectId, Scene, SceneObject};

/// Re-export the math types used throughout the public API
pub use archer_math::{Interval, Mat3, Ray, UVec2, Vec3, VectorExt};
