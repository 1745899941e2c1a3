use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::buffer::PixelBuffer;
use crate::error::{RasterError, Result};

/// Copies the buffer into an `image` RGBA image.
pub fn to_rgba_image(buffer: &PixelBuffer) -> Result<RgbaImage> {
    let (width, height) = (buffer.width(), buffer.height());
    RgbaImage::from_raw(width, height, buffer.as_raw().to_vec())
        .ok_or(RasterError::InvalidDimensions { width, height })
}

/// Encodes the buffer as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    to_rgba_image(buffer)?.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::info!(
        "Encoded {}x{} canvas as PNG ({} bytes)",
        buffer.width(),
        buffer.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// `name` with a `.png` extension.
pub fn export_file_name(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { crate::config::DEFAULT_EXPORT_NAME } else { name };
    format!("{name}.png")
}
