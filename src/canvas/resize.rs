//! Canvas resizing and resampling.
//!
//! Three strategies are available:
//! - [`ResizeMode::Crop`] keeps pixels where they are and crops or pads with
//!   transparency.
//! - [`ResizeMode::Nearest`] scales by picking the nearest source pixel.
//! - [`ResizeMode::Smooth`] scales with bilinear sampling, averaging several
//!   samples per axis when shrinking (a box filter approximation).
//!
//! Smooth sampling flattens every source pixel onto opaque white before
//! interpolating, so its output is always opaque. It is meant as a preview
//! quality scale, not an alpha-correct one.

use log::debug;

use super::Canvas;
use crate::types::Colour;

/// How existing content is carried over when a canvas changes size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMode {
    /// Keep the overlapping top-left rectangle verbatim; new area is transparent.
    #[default]
    Crop,
    /// Scale the content, sampling the nearest source pixel.
    Nearest,
    /// Scale the content with bilinear sampling and box-averaged shrinking.
    Smooth,
}

impl ResizeMode {
    /// Map the editor's "keep content" and "smooth" switches onto a mode.
    ///
    /// `smooth` only matters when content is scaled.
    pub fn from_flags(preserve_content: bool, smooth: bool) -> Self {
        match (preserve_content, smooth) {
            (false, _) => Self::Crop,
            (true, false) => Self::Nearest,
            (true, true) => Self::Smooth,
        }
    }
}

impl Canvas {
    /// Resize in place.
    ///
    /// The replacement is built in full before it is swapped in, so the canvas
    /// is never observed half-resized.
    pub fn resize(&mut self, width: u32, height: u32, mode: ResizeMode) {
        let resized = self.resized(width, height, mode);
        *self = resized;
    }

    /// Produce a new canvas of the given size from this one.
    pub fn resized(&self, width: u32, height: u32, mode: ResizeMode) -> Canvas {
        debug!(
            "resize {}x{} -> {}x{} ({:?})",
            self.width, self.height, width, height, mode
        );

        let mut out = Canvas::new(width, height);
        if self.is_empty() || out.is_empty() {
            return out;
        }

        match mode {
            ResizeMode::Crop => self.crop_into(&mut out),
            ResizeMode::Nearest => self.nearest_into(&mut out),
            ResizeMode::Smooth => self.smooth_into(&mut out),
        }

        out
    }

    /// Bilinearly sample at fractional source coordinates.
    ///
    /// Neighbours past the last row or column are clamped to it. Each of the
    /// four neighbours is flattened onto opaque white using its own alpha
    /// before interpolation, and the result is opaque. Channels are truncated.
    pub fn sample_smooth(&self, x: f32, y: f32) -> Colour {
        if self.is_empty() {
            return Colour::TRANSPARENT;
        }

        let max_x = self.width - 1;
        let max_y = self.height - 1;

        let fx = (x.floor().max(0.0) as u32).min(max_x);
        let fy = (y.floor().max(0.0) as u32).min(max_y);
        let fx1 = (fx + 1).min(max_x);
        let fy1 = (fy + 1).min(max_y);

        let tx = x - x.floor();
        let ty = y - y.floor();

        let c00 = flatten_on_white(self.pixel_at(fx, fy));
        let c10 = flatten_on_white(self.pixel_at(fx1, fy));
        let c01 = flatten_on_white(self.pixel_at(fx, fy1));
        let c11 = flatten_on_white(self.pixel_at(fx1, fy1));

        let channel = |i: usize| lerp2d(c00[i], c10[i], c01[i], c11[i], tx, ty) as u8;
        Colour::new(channel(0), channel(1), channel(2), 255)
    }

    fn crop_into(&self, out: &mut Canvas) {
        let row_bytes = self.width.min(out.width) as usize * 4;
        let rows = self.height.min(out.height) as usize;
        let src_stride = self.width as usize * 4;
        let dst_stride = out.width as usize * 4;

        for row in 0..rows {
            let src = &self.data[row * src_stride..row * src_stride + row_bytes];
            out.data[row * dst_stride..row * dst_stride + row_bytes].copy_from_slice(src);
        }
    }

    fn nearest_into(&self, out: &mut Canvas) {
        let (sx, sy) = self.scale_to(out);

        for y in 0..out.height {
            let src_y = ((y as f32 * sy).floor() as u32).min(self.height - 1);
            for x in 0..out.width {
                let src_x = ((x as f32 * sx).floor() as u32).min(self.width - 1);
                out.put(x, y, self.pixel_at(src_x, src_y));
            }
        }
    }

    fn smooth_into(&self, out: &mut Canvas) {
        let (sx, sy) = self.scale_to(out);

        // Shrinking takes ceil(scale) samples along the axis, one source pixel
        // apart, and divides by that count even when the last one overhangs.
        let samples_x = if sx > 1.0 { sx.ceil() as u32 } else { 1 };
        let samples_y = if sy > 1.0 { sy.ceil() as u32 } else { 1 };
        let divisor = (samples_x * samples_y) as f32;

        for y in 0..out.height {
            let base_y = y as f32 * sy;
            for x in 0..out.width {
                let base_x = x as f32 * sx;

                let mut sum = [0.0f32; 4];
                for j in 0..samples_y {
                    for i in 0..samples_x {
                        let c = self.sample_smooth(base_x + i as f32, base_y + j as f32);
                        for (acc, v) in sum.iter_mut().zip(c.to_rgba()) {
                            *acc += v as f32;
                        }
                    }
                }

                let [r, g, b, a] = sum.map(|v| (v / divisor) as u8);
                out.put(x, y, Colour::new(r, g, b, a));
            }
        }
    }

    /// Source pixels per destination pixel along each axis (above 1 means shrinking).
    fn scale_to(&self, out: &Canvas) -> (f32, f32) {
        (
            self.width as f32 / out.width as f32,
            self.height as f32 / out.height as f32,
        )
    }

    fn put(&mut self, x: u32, y: u32, colour: Colour) {
        let i = (x as usize + y as usize * self.width as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&colour.to_rgba());
    }
}

/// Composite a colour onto opaque white, returning float channels.
fn flatten_on_white(colour: Colour) -> [f32; 4] {
    let alpha = colour.a as f32 / 255.0;
    let over_white = |c: u8| lerp(255.0, c as f32, alpha);
    [over_white(colour.r), over_white(colour.g), over_white(colour.b), 255.0]
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp2d(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> f32 {
    let top = lerp(a, b, tx);
    let bottom = lerp(c, d, tx);
    lerp(top, bottom, ty)
}
