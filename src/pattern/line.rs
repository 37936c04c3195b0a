//! # Line
//!
//! A horizontal stroke through the cell center with butt ends.
//!
//! ```text
//! length = cell_size * factor
//! width  = max(1, factor * 2)
//! ```
//!
//! The rotated style turns each stroke by `(cx + cy) * 0.05`, which wraps
//! around several times across an image and gives a hatched, scribbled look.

use crate::geometry::sd_box;
use crate::render::{InkCanvas, Mark, MarkStyle};

/// Lengths at or below this are not drawn.
pub const MIN_SIZE: f32 = 1.0;

/// Stroke length.
#[inline]
pub fn size(cell_size: f32, factor: f32) -> f32 {
    cell_size * factor
}

/// Stroke width, never thinner than one pixel.
#[inline]
pub fn stroke_width(factor: f32) -> f32 {
    (factor * 2.0).max(1.0)
}

#[inline]
pub fn angle(mark: &Mark, style: MarkStyle) -> f32 {
    if style.is_rotated() {
        (mark.cx + mark.cy) * 0.05
    } else {
        0.0
    }
}

/// Farthest a line can extend from its center (a stroke corner).
#[inline]
pub fn reach(cell_size: f32) -> f32 {
    (cell_size / 2.0).hypot(stroke_width(1.0) / 2.0)
}

pub fn draw(canvas: &mut InkCanvas<'_>, mark: &Mark, style: MarkStyle) {
    let length = size(mark.cell_size, mark.factor);
    if length <= MIN_SIZE {
        return;
    }
    let half_len = length / 2.0;
    let half_width = stroke_width(mark.factor) / 2.0;
    canvas.fill(
        mark.cx,
        mark.cy,
        angle(mark, style),
        half_len.hypot(half_width),
        1.0,
        |x, y| sd_box(x, y, half_len, half_width),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InkBuffer;

    #[test]
    fn test_full_line_spans_cell() {
        let mut buffer = InkBuffer::new(10, 10);
        draw(
            &mut buffer.canvas(),
            &Mark::at(5.0, 5.0, 10.0, 1.0),
            MarkStyle::Plain,
        );
        // width 2 centered on y = 5 covers rows 4 and 5
        for x in 0..10 {
            assert_eq!(buffer.ink(x, 4), 1.0);
            assert_eq!(buffer.ink(x, 5), 1.0);
            assert_eq!(buffer.ink(x, 3), 0.0);
            assert_eq!(buffer.ink(x, 6), 0.0);
        }
    }

    #[test]
    fn test_stroke_width_floor() {
        assert_eq!(stroke_width(0.1), 1.0);
        assert_eq!(stroke_width(0.5), 1.0);
        assert_eq!(stroke_width(0.75), 1.5);
        assert_eq!(stroke_width(1.0), 2.0);
    }

    #[test]
    fn test_rotated_line_leaves_horizontal() {
        let mut plain = InkBuffer::new(10, 10);
        let mut rotated = InkBuffer::new(10, 10);
        let mark = Mark::at(5.0, 5.0, 10.0, 1.0);
        draw(&mut plain.canvas(), &mark, MarkStyle::Plain);
        draw(&mut rotated.canvas(), &mark, MarkStyle::Rotated);
        // angle 0.5 rad lifts the stroke off the row ends
        assert_eq!(plain.ink(0, 4), 1.0);
        assert!(rotated.ink(0, 4) < 1.0);
        assert!(rotated.ink(0, 7) > 0.0 || rotated.ink(0, 2) > 0.0);
    }

    #[test]
    fn test_suppressed_at_one_pixel() {
        let mut buffer = InkBuffer::new(10, 10);
        draw(
            &mut buffer.canvas(),
            &Mark::at(5.0, 5.0, 10.0, 0.09),
            MarkStyle::Plain,
        );
        assert!((0..10).all(|y| (0..10).all(|x| buffer.ink(x, y) == 0.0)));
    }
}
