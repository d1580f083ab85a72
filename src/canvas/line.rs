//! Straight line rasterisation.

use log::trace;

use super::Canvas;
use crate::types::Colour;

impl Canvas {
    /// Draw a line from `(x0, y0)` to `(x1, y1)`, overwriting pixels with `colour`.
    ///
    /// Two sweeps run: one stepping along x and solving for y, one stepping
    /// along y and solving for x. Together they leave no gaps on shallow or
    /// steep slopes. Each sweep covers `min..max` of its axis (end excluded),
    /// so both endpoints are written explicitly first.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        trace!("line ({}, {}) -> ({}, {}) {}", x0, y0, x1, y1, colour);

        self.set_pixel(x0, y0, colour);
        self.set_pixel(x1, y1, colour);

        // An axis with zero extent yields an empty range, so neither division
        // below can see a zero denominator. Sweeps only visit rows and columns
        // inside the canvas; everything else would be a no-op write.
        for x in sweep(x0, x1, self.width()) {
            let y = solve(x, x0, y0, x1, y1);
            self.set_pixel(x, y, colour);
        }

        for y in sweep(y0, y1, self.height()) {
            let x = solve(y, y0, x0, y1, x1);
            self.set_pixel(x, y, colour);
        }
    }
}

/// `min..max` of the two ends, clipped to `0..extent`.
fn sweep(a0: i32, a1: i32, extent: u32) -> std::ops::Range<i32> {
    let end = i64::from(a0.max(a1)).min(i64::from(extent)) as i32;
    a0.min(a1).max(0)..end
}

/// Solve the line through `(a0, b0)` and `(a1, b1)` for `b` at `a`, rounding half away from zero.
///
/// Results beyond `i32` saturate; they are off-canvas either way.
fn solve(a: i32, a0: i32, b0: i32, a1: i32, b1: i32) -> i32 {
    let db = f64::from(b1) - f64::from(b0);
    let da = f64::from(a1) - f64::from(a0);
    (db * (f64::from(a) - f64::from(a0)) / da + f64::from(b0)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Colour = Colour::rgb(0, 0, 0);

    fn drawn(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.compare_pixel(x, y, INK) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    #[test]
    fn test_horizontal_line() {
        let mut canvas = Canvas::new(5, 3);
        canvas.draw_line(0, 1, 4, 1, INK);
        assert_eq!(drawn(&canvas), vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_vertical_line() {
        let mut canvas = Canvas::new(3, 4);
        canvas.draw_line(2, 3, 2, 0, INK);
        assert_eq!(drawn(&canvas), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_single_point() {
        let mut canvas = Canvas::new(3, 3);
        canvas.draw_line(1, 1, 1, 1, INK);
        assert_eq!(drawn(&canvas), vec![(1, 1)]);
    }

    #[test]
    fn test_shallow_line_rounds_half_away_from_zero() {
        let mut canvas = Canvas::new(3, 2);
        canvas.draw_line(0, 0, 2, 1, INK);
        // x = 1 solves to y = 0.5 which rounds up; the y sweep adds (0, 0) again.
        assert_eq!(drawn(&canvas), vec![(0, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_steep_line_has_no_gaps() {
        let mut canvas = Canvas::new(3, 7);
        canvas.draw_line(0, 0, 2, 6, INK);
        let points = drawn(&canvas);
        for y in 0..7 {
            assert!(points.iter().any(|&(_, py)| py == y), "row {} is empty", y);
        }
    }

    #[test]
    fn test_reversed_endpoints_draw_the_same_pixels() {
        let segments = [(1, 1, 6, 3), (0, 7, 7, 0), (2, 0, 5, 7), (0, 0, 7, 2), (3, 3, 0, 4)];
        for (x0, y0, x1, y1) in segments {
            let mut forward = Canvas::new(8, 8);
            forward.draw_line(x0, y0, x1, y1, INK);
            let mut backward = Canvas::new(8, 8);
            backward.draw_line(x1, y1, x0, y0, INK);
            assert_eq!(forward, backward, "segment {:?}", (x0, y0, x1, y1));
        }
    }

    #[test]
    fn test_line_is_clipped_to_canvas() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_line(-3, -3, 6, 6, INK);
        assert_eq!(drawn(&canvas), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_line_with_extreme_endpoints() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_line(i32::MIN, 0, i32::MAX, 3, INK);
        // Nearly horizontal across the whole i32 range: the visible part sits on row 1 or 2.
        let points = drawn(&canvas);
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|&(_, y)| y == 1 || y == 2), "{:?}", points);

        let mut canvas = Canvas::new(4, 4);
        canvas.draw_line(i32::MAX, i32::MIN, i32::MIN, i32::MAX, INK);
        canvas.draw_line(i32::MIN, i32::MIN, i32::MIN, i32::MAX, INK);
        canvas.draw_line(-5, i32::MAX, 10, i32::MAX, INK);
        assert!(drawn(&canvas).is_empty());
    }

    #[test]
    fn test_line_replaces_without_blending() {
        let mut canvas = Canvas::new(3, 1);
        canvas.set_pixel(1, 0, Colour::rgb(255, 0, 0));
        let glass = Colour::new(0, 0, 255, 10);
        canvas.draw_line(0, 0, 2, 0, glass);
        assert_eq!(canvas.get_pixel(1, 0), Some(glass));
    }
}
