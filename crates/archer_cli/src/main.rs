//! Archer command-line renderer
//!
//! Builds one of the demo scenes, renders it and writes the image to disk.
//!
//! Usage:
//!   archer --scene spheres --dimensions 1280x720 --spp 8 --output render.png

mod output;
mod scenes;

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use archer_renderer::{render, Camera, ExecutionMode, RenderConfig, DEFAULT_BUCKET_SIZE};
use clap::{Parser, ValueEnum};
use scenes::AvailableScene;

/// Image size parsed from `width`x`height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((width, height)) = s.split_once('x') else {
            bail!("Expected `width`x`height`, got `{s}`");
        };
        let width: u32 = width.trim().parse().context("Invalid width")?;
        let height: u32 = height.trim().parse().context("Invalid height")?;
        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AvailableExecution {
    #[default]
    Multithreaded,
    Monothreaded,
}

impl From<AvailableExecution> for ExecutionMode {
    fn from(value: AvailableExecution) -> Self {
        match value {
            AvailableExecution::Multithreaded => ExecutionMode::Multithreaded,
            AvailableExecution::Monothreaded => ExecutionMode::Monothreaded,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "archer", version, about = "CPU path tracer")]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Image dimensions in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long = "spp", default_value_t = 1)]
    /// Samples per pixel
    samples_per_pixel: u32,

    #[arg(long, default_value_t = 4)]
    /// Maximum surface hits per path
    max_bounces: u32,

    #[arg(long, default_value_t = 90.0)]
    /// Vertical field of view in degrees
    fov: f32,

    #[arg(long, default_value_t = 0.0)]
    /// Random perturbation added to primary ray directions
    dither: f32,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    /// Bucket edge length in pixels
    bucket_size: u32,

    #[arg(long)]
    /// Worker thread count (rayon default when omitted)
    threads: Option<usize>,

    #[arg(long, value_enum, default_value_t)]
    execution_mode: AvailableExecution,

    #[arg(short, long, default_value = "output.png")]
    /// Output image path
    output: PathBuf,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig> {
        let config = RenderConfig {
            samples_per_pixel: self.samples_per_pixel,
            max_bounces: self.max_bounces,
            seed: self.seed,
            bucket_size: self.bucket_size,
            execution: self.execution_mode.into(),
        };
        config.validate()?;
        Ok(config)
    }

    fn camera(&self) -> Result<Camera> {
        let camera = Camera::new(self.dimensions.width, self.dimensions.height, self.fov)?
            .with_dither(self.dither)?;
        Ok(camera)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
        log::info!("Using {} threads", threads);
    }

    let config = args.render_config().context("Invalid render settings")?;
    let camera = args.camera().context("Invalid camera settings")?;
    let scene = args.scene.build().context("Failed to build scene")?;

    log::info!("Rendering {:?} at {}", args.scene, args.dimensions);
    let framebuffer = render(&camera, &scene, &config)?;

    output::save(&framebuffer, &args.output)
}
