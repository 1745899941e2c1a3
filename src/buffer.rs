use std::sync::Arc;

use crate::color::Color;
use crate::error::{RasterError, Result};

/// A fixed-size grid of RGBA pixels, stored row-major with four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// An immutable full copy of a buffer's pixels.
///
/// Pixel data is shared behind an `Arc`, so cloning a snapshot never copies
/// pixels; taking one from a buffer always does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    data: Arc<[u8]>,
}

impl PixelBuffer {
    /// Creates a buffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let data = background
            .to_array()
            .repeat(width as usize * height as usize);
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn get(&self, x: i64, y: i64) -> Result<Color> {
        let i = self.index(x, y)?;
        Ok(Color::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    pub fn set(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        let i = self.index(x, y)?;
        self.data[i..i + 4].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Writes a pixel, silently dropping it when it falls outside the buffer.
    pub(crate) fn put(&mut self, x: i64, y: i64, color: Color) {
        if let Ok(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Fills the intersection of the rectangle with the buffer.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i64).min(self.width as i64);
        let y1 = (y + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let rgba = color.to_array();
        let stride = self.width as usize * 4;
        for row in y0 as usize..y1 as usize {
            let start = row * stride + x0 as usize * 4;
            let end = row * stride + x1 as usize * 4;
            for px in self.data[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Fills every pixel.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_array();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            data: Arc::from(self.data.as_slice()),
        }
    }

    /// Overwrites every pixel from `snapshot`, which must have the same size.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<()> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(RasterError::DimensionMismatch {
                expected: (self.width, self.height),
                found: (snapshot.width, snapshot.height),
            });
        }
        self.data.copy_from_slice(&snapshot.data);
        Ok(())
    }

    /// Whether the pixels equal those captured in `snapshot`.
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        self.width == snapshot.width && self.height == snapshot.height && *self.data == *snapshot.data
    }
}
