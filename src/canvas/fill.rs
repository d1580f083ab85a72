//! Four-connected flood fill.

use log::debug;

use super::Canvas;
use crate::types::Colour;

impl Canvas {
    /// Flood fill the 4-connected region of the colour under `(x, y)` with `colour`.
    ///
    /// Starting outside the canvas, or on a pixel that already has `colour`,
    /// does nothing. Uses an explicit stack rather than recursion, so region
    /// size is bounded by memory and not by call depth.
    pub fn fill(&mut self, x: i32, y: i32, colour: Colour) {
        let Some(target) = self.get_pixel(x, y) else {
            return;
        };

        // Without this guard every filled pixel would match again forever.
        if target == colour {
            return;
        }

        let mut filled = 1usize;
        let mut stack = vec![(x, y)];
        self.set_pixel(x, y, colour);

        while let Some((px, py)) = stack.pop() {
            for (nx, ny) in [(px - 1, py), (px + 1, py), (px, py - 1), (px, py + 1)] {
                if self.compare_pixel(nx, ny, target) {
                    self.set_pixel(nx, ny, colour);
                    stack.push((nx, ny));
                    filled += 1;
                }
            }
        }

        debug!("filled {} pixels from ({}, {}) with {}", filled, x, y, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(255, 0, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 255);

    fn count(canvas: &Canvas, colour: Colour) -> usize {
        canvas
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| *px == colour.to_rgba())
            .count()
    }

    #[test]
    fn test_fill_empty_canvas() {
        let mut canvas = Canvas::new(5, 4);
        canvas.fill(2, 2, RED);
        assert_eq!(count(&canvas, RED), 20);
    }

    #[test]
    fn test_fill_stops_at_boundary() {
        // A vertical wall at x = 2 splits the canvas in two.
        let mut canvas = Canvas::new(5, 3);
        canvas.draw_line(2, 0, 2, 2, BLUE);
        canvas.fill(0, 0, RED);

        assert_eq!(count(&canvas, RED), 6);
        assert_eq!(count(&canvas, BLUE), 3);
        assert_eq!(canvas.get_pixel(4, 2), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_is_four_connected() {
        // Diagonal neighbours do not connect regions.
        let mut canvas = Canvas::new(2, 2);
        canvas.set_pixel(1, 0, BLUE);
        canvas.set_pixel(0, 1, BLUE);
        canvas.fill(0, 0, RED);

        assert_eq!(canvas.get_pixel(0, 0), Some(RED));
        assert_eq!(canvas.get_pixel(1, 1), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_isolated_pixel_changes_one_pixel() {
        let mut canvas = Canvas::new(3, 3);
        canvas.fill(0, 0, BLUE);
        canvas.set_pixel(1, 1, Colour::WHITE);

        let before = canvas.clone();
        canvas.fill(1, 1, RED);

        let changed = before
            .as_bytes()
            .chunks_exact(4)
            .zip(canvas.as_bytes().chunks_exact(4))
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
        assert_eq!(canvas.get_pixel(1, 1), Some(RED));
    }

    #[test]
    fn test_fill_twice_is_idempotent() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_line(0, 3, 3, 0, BLUE);
        canvas.fill(0, 0, RED);
        let once = canvas.clone();
        canvas.fill(0, 0, RED);
        assert_eq!(canvas, once);
    }

    #[test]
    fn test_fill_outside_is_a_no_op() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(-1, 0, RED);
        canvas.fill(0, 2, RED);
        assert_eq!(canvas, Canvas::new(2, 2));
    }

    #[test]
    fn test_fill_matches_alpha_exactly() {
        let mut canvas = Canvas::new(3, 1);
        canvas.set_pixel(1, 0, Colour::new(0, 0, 0, 1));
        canvas.fill(0, 0, RED);
        assert_eq!(canvas.get_pixel(0, 0), Some(RED));
        assert_eq!(canvas.get_pixel(1, 0), Some(Colour::new(0, 0, 0, 1)));
        assert_eq!(canvas.get_pixel(2, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_large_region_without_recursion() {
        let mut canvas = Canvas::new(512, 512);
        canvas.fill(256, 256, BLUE);
        assert_eq!(count(&canvas, BLUE), 512 * 512);
    }
}
