//! Error types for the renderer.

use thiserror::Error;

/// Invalid configuration, rejected when the offending value is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid resolution {width}x{height}: both dimensions must be non-zero")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid field of view {0}: must be strictly between 0 and 180 degrees")]
    InvalidFov(f32),

    #[error("Invalid dither {0}: must be finite and non-negative")]
    InvalidDither(f32),

    #[error("Invalid sphere radius {0}: must be finite and positive")]
    InvalidRadius(f32),

    #[error("Degenerate plane normal {0:?}: must have non-zero length")]
    DegenerateNormal([f32; 3]),

    #[error("samples_per_pixel must be at least 1")]
    ZeroSamples,

    #[error("bucket_size must be at least 1")]
    ZeroBucketSize,
}

/// Errors returned by the render entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Render cancelled")]
    Cancelled,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidResolution { width: 0, height: 64 };
        assert_eq!(
            err.to_string(),
            "Invalid resolution 0x64: both dimensions must be non-zero"
        );

        let err: RenderError = ConfigError::ZeroSamples.into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: samples_per_pixel must be at least 1"
        );
    }
}
