//! 8-bit RGB output buffer.

use crate::bucket::BucketResult;
use crate::material::Color;
use archer_math::Interval;

/// Dense row-major RGB image, `y` as the outer index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Flat `height × width × 3` byte view, as expected by image encoders.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, chunk) in result.pixels.chunks(bucket.width as usize).enumerate() {
            let start = self.index(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }
}

/// Clamp a 0-255 color to bytes.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        Interval::BYTE.clamp(color.x) as u8,
        Interval::BYTE.clamp(color.y) as u8,
        Interval::BYTE.clamp(color.z) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::Bucket;

    #[test]
    fn test_framebuffer_layout() {
        let mut fb = Framebuffer::new(4, 3);
        assert_eq!(fb.pixels().len(), 12);
        assert_eq!(fb.as_bytes().len(), 4 * 3 * 3);

        fb.set(1, 2, [10, 20, 30]);
        assert_eq!(fb.get(1, 2), [10, 20, 30]);

        // Row-major with y outer: (1, 2) -> pixel 9 -> bytes 27..30
        assert_eq!(&fb.as_bytes()[27..30], &[10, 20, 30]);
    }

    #[test]
    fn test_write_bucket() {
        let mut fb = Framebuffer::new(5, 4);
        let bucket = Bucket::new(2, 1, 3, 2, 0);
        let pixels = (1..=6).map(|i| [i as u8; 3]).collect();
        fb.write_bucket(&BucketResult::new(bucket, pixels));

        assert_eq!(fb.get(2, 1), [1; 3]);
        assert_eq!(fb.get(4, 1), [3; 3]);
        assert_eq!(fb.get(2, 2), [4; 3]);
        assert_eq!(fb.get(4, 2), [6; 3]);
        // Untouched outside the bucket
        assert_eq!(fb.get(1, 1), [0; 3]);
        assert_eq!(fb.get(2, 3), [0; 3]);
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(-10.0, 127.9, 300.0)), [0, 127, 255]);
        assert_eq!(color_to_rgb(Color::new(255.0, 0.0, 1.0)), [255, 0, 1]);
    }
}
