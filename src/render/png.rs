//! PNG import and export for canvases and composited buffers.
//!
//! The engine itself never touches files; these helpers serve the command
//! line host. Output may be upscaled by an integer factor for crisp previews.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};

/// Load a PNG (or any format `image` can decode) into a canvas.
pub fn load_canvas(path: &Path) -> Result<Canvas> {
    let img = image::open(path)
        .map_err(|e| CanvasError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    Canvas::from_raw(width, height, img.into_raw())
}

/// Write a canvas to a PNG file.
pub fn write_canvas(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    write_rgba(canvas.as_bytes(), canvas.width(), canvas.height(), path, scale)
}

/// Write a tightly packed RGBA8 buffer to a PNG file.
///
/// # Arguments
///
/// * `rgba` - `width * height * 4` bytes, row-major
/// * `path` - Output file path
/// * `scale` - Integer scale factor (0 and 1 both mean no scaling)
pub fn write_rgba(rgba: &[u8], width: u32, height: u32, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1);

    let source: RgbaImage = ImageBuffer::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
        CanvasError::Dimension {
            message: format!(
                "{} bytes do not describe a {}x{} RGBA image",
                rgba.len(),
                width,
                height
            ),
            help: None,
        }
    })?;

    let img = if scale == 1 {
        source
    } else {
        ImageBuffer::from_fn(width * scale, height * scale, |x, y| {
            *source.get_pixel(x / scale, y / scale)
        })
    };

    img.save(path).map_err(|e| CanvasError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
