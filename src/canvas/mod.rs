//! Owned RGBA8 pixel buffer and the drawing operations on it.
//!
//! A [`Canvas`] is a row-major block of `width * height * 4` bytes with the
//! channels of each pixel stored as R, G, B, A. Coordinates are signed so that
//! callers can pass cursor positions straight through: writes outside the
//! canvas are dropped and reads outside it return `None`.

mod fill;
mod line;
mod resize;

pub use resize::ResizeMode;

use crate::error::{CanvasError, Result};
use crate::types::Colour;

/// An owned RGBA8 raster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Always exactly `width * height * 4` bytes.
    data: Vec<u8>,
}

impl Canvas {
    /// Create a fully transparent canvas. Either dimension may be zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height);
        if data.len() != expected {
            return Err(CanvasError::Dimension {
                message: format!(
                    "{}x{} canvas needs {} bytes, got {}",
                    width,
                    height,
                    expected,
                    data.len()
                ),
                help: Some("Pixel data must be tightly packed RGBA8".to_string()),
            });
        }

        Ok(Self { width, height, data })
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the canvas has no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas, returning its RGBA8 bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Whether `(x, y)` addresses a pixel of this canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Write `colour` at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&colour.to_rgba());
        }
    }

    /// Read the colour at `(x, y)`, or `None` outside the canvas.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Colour> {
        self.offset(x, y).map(|i| Colour::from_slice(&self.data[i..i + 4]))
    }

    /// True iff the pixel at `(x, y)` equals `colour` in all four channels.
    ///
    /// Coordinates outside the canvas never match.
    pub fn compare_pixel(&self, x: i32, y: i32, colour: Colour) -> bool {
        self.offset(x, y)
            .is_some_and(|i| self.data[i..i + 4] == colour.to_rgba())
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Copy every pixel into `target`, which must have the same size.
    pub fn copy_content(&self, target: &mut Canvas) -> Result<()> {
        if self.size() != target.size() {
            return Err(CanvasError::Dimension {
                message: format!(
                    "cannot copy a {}x{} canvas into a {}x{} one",
                    self.width, self.height, target.width, target.height
                ),
                help: Some("Resize the target first".to_string()),
            });
        }

        target.data.copy_from_slice(&self.data);
        Ok(())
    }

    /// Pixel at in-bounds unsigned coordinates. Used by the resampler and compositor.
    pub(crate) fn pixel_at(&self, x: u32, y: u32) -> Colour {
        let i = (x as usize + y as usize * self.width as usize) * 4;
        Colour::from_slice(&self.data[i..i + 4])
    }

    /// Byte offset of `(x, y)`, if it lies inside the canvas.
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((x as usize + y as usize * self.width as usize) * 4)
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
