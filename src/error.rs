use thiserror::Error;

/// Errors raised by the raster engine
#[derive(Error, Debug)]
pub enum RasterError {
    /// Pixel access outside the buffer
    #[error("({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// A color string could not be parsed
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A snapshot was restored into a buffer of another size
    #[error("snapshot is {}x{} but the buffer is {}x{}", .found.0, .found.1, .expected.0, .expected.1)]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// Buffers must be at least one pixel in each direction
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RasterError>;
