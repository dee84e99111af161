//! PNG export of a finished framebuffer.

use std::path::Path;

use anyhow::{Context, Result};
use archer_renderer::Framebuffer;
use image::RgbImage;

/// Convert a framebuffer into an `image` buffer.
pub fn to_image(framebuffer: &Framebuffer) -> Result<RgbImage> {
    RgbImage::from_raw(
        framebuffer.width(),
        framebuffer.height(),
        framebuffer.as_bytes().to_vec(),
    )
    .context("Framebuffer size does not match its dimensions")
}

/// Save a framebuffer; the format follows the file extension.
pub fn save(framebuffer: &Framebuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    to_image(framebuffer)?
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {}", path.display());
    Ok(())
}
