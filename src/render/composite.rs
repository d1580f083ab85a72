//! Layer compositor - flattens a stack of canvases into one RGBA8 buffer.
//!
//! Layers are visited in list order and folded into a floating point
//! accumulator. `Over` layers fill whatever coverage the accumulator still
//! lacks, so the first layer in the list ends up in front. The running colour
//! is scaled by its own alpha at each step and never divided back out. `Add`
//! layers add their alpha-weighted colour to the accumulator without
//! normalising.

use log::debug;

use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};
use crate::types::{BlendMode, Colour};

/// Channel sum below which the highlight brightens instead of darkening.
const HIGHLIGHT_THRESHOLD: u32 = 110 * 3;

/// How much the highlight shifts each colour channel.
const HIGHLIGHT_SHIFT: u8 = 60;

/// How much the highlight raises alpha.
const HIGHLIGHT_ALPHA: u8 = 200;

/// One compositor input: a borrowed canvas and the mode it blends with.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub canvas: &'a Canvas,
    pub mode: BlendMode,
}

impl<'a> Layer<'a> {
    /// Create a layer with an explicit blend mode.
    pub fn new(canvas: &'a Canvas, mode: BlendMode) -> Self {
        Self { canvas, mode }
    }

    /// Create an alpha-composited layer.
    pub fn over(canvas: &'a Canvas) -> Self {
        Self::new(canvas, BlendMode::Over)
    }

    /// Create an additive layer.
    pub fn add(canvas: &'a Canvas) -> Self {
        Self::new(canvas, BlendMode::Add)
    }
}

/// Running composite for a single pixel, channels in `0.0..=1.0` (Add may exceed).
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Accumulator {
    fn blend(&mut self, colour: Colour, mode: BlendMode) {
        let [r, g, b, a] = colour.to_rgba().map(|c| c as f32 / 255.0);

        match mode {
            BlendMode::Add => {
                self.r += r * a;
                self.g += g * a;
                self.b += b * a;
                self.a += a;
            }
            BlendMode::Over => {
                // Whatever the accumulator does not cover shows this layer.
                let coef = a * (1.0 - self.a);
                self.r = self.r * self.a + r * coef;
                self.g = self.g * self.a + g * coef;
                self.b = self.b * self.a + b * coef;
                self.a += coef;
            }
        }
    }

    /// Clamp to `0.0..=1.0` and scale to bytes, truncating.
    fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8)
    }
}

/// Flatten `layers` into a `width * height * 4` RGBA8 buffer.
///
/// Every layer must be at least `width x height`; smaller layers are rejected
/// before any pixel is read. An empty layer list yields a transparent buffer.
/// When `highlight` names an output pixel, that pixel is adjusted afterwards
/// so a cursor stays visible on any background.
pub fn render_layers(
    width: u32,
    height: u32,
    layers: &[Layer<'_>],
    highlight: Option<(u32, u32)>,
) -> Result<Vec<u8>> {
    for (index, layer) in layers.iter().enumerate() {
        let (lw, lh) = layer.canvas.size();
        if lw < width || lh < height {
            return Err(CanvasError::Dimension {
                message: format!(
                    "layer {} is {}x{} but the output is {}x{}",
                    index, lw, lh, width, height
                ),
                help: Some("Resize every layer to the output size before compositing".to_string()),
            });
        }
    }

    debug!(
        "compositing {} layer(s) into {}x{} (highlight: {:?})",
        layers.len(),
        width,
        height,
        highlight
    );

    let mut out = Vec::with_capacity(width as usize * height as usize * 4);

    for y in 0..height {
        for x in 0..width {
            let mut acc = Accumulator::default();
            for layer in layers {
                acc.blend(layer.canvas.pixel_at(x, y), layer.mode);
            }

            let mut rgba = acc.to_bytes();
            if highlight == Some((x, y)) {
                highlight_pixel(&mut rgba);
            }
            out.extend_from_slice(&rgba);
        }
    }

    Ok(out)
}

/// Brighten dark pixels, darken light ones, and make the result mostly opaque.
fn highlight_pixel(rgba: &mut [u8; 4]) {
    let sum: u32 = rgba[..3].iter().map(|&c| c as u32).sum();

    for channel in &mut rgba[..3] {
        *channel = if sum < HIGHLIGHT_THRESHOLD {
            channel.saturating_add(HIGHLIGHT_SHIFT)
        } else {
            channel.saturating_sub(HIGHLIGHT_SHIFT)
        };
    }
    rgba[3] = rgba[3].saturating_add(HIGHLIGHT_ALPHA);
}
