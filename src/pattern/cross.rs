//! # Cross
//!
//! Two perpendicular strokes through the cell center, each `cell_size * factor`
//! long and `max(1, factor * 1.5)` wide. The rotated style turns the cross by
//! `factor * PI/12`.

use std::f32::consts::PI;

use crate::geometry::sd_box;
use crate::render::{InkCanvas, Mark, MarkStyle};

/// Arm lengths at or below this are not drawn.
pub const MIN_SIZE: f32 = 1.0;

/// Length of each stroke.
#[inline]
pub fn size(cell_size: f32, factor: f32) -> f32 {
    cell_size * factor
}

/// Stroke width, never thinner than one pixel.
#[inline]
pub fn stroke_width(factor: f32) -> f32 {
    (factor * 1.5).max(1.0)
}

#[inline]
pub fn angle(mark: &Mark, style: MarkStyle) -> f32 {
    if style.is_rotated() {
        mark.factor * PI / 12.0
    } else {
        0.0
    }
}

/// Farthest a cross can extend from its center (a stroke corner).
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
    // Union of both strokes, so the center is only inked once.
    canvas.fill(
        mark.cx,
        mark.cy,
        angle(mark, style),
        half_len.hypot(half_width),
        1.0,
        |x, y| sd_box(x, y, half_len, half_width).min(sd_box(x, y, half_width, half_len)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InkBuffer;

    #[test]
    fn test_cross_arms() {
        let mut buffer = InkBuffer::new(11, 11);
        draw(
            &mut buffer.canvas(),
            &Mark::at(5.5, 5.5, 11.0, 2.0 / 3.0),
            MarkStyle::Plain,
        );
        // width 1 strokes through the center pixel, length ~7.3
        assert_eq!(buffer.ink(5, 5), 1.0);
        assert_eq!(buffer.ink(2, 5), 1.0);
        assert_eq!(buffer.ink(5, 8), 1.0);
        // Off-axis pixels stay white
        assert_eq!(buffer.ink(3, 3), 0.0);
        assert_eq!(buffer.ink(8, 8), 0.0);
        // Beyond the arm ends
        assert_eq!(buffer.ink(0, 5), 0.0);
        assert_eq!(buffer.ink(5, 10), 0.0);
    }

    #[test]
    fn test_symmetric_under_quarter_turn() {
        let mut buffer = InkBuffer::new(12, 12);
        draw(
            &mut buffer.canvas(),
            &Mark::at(6.0, 6.0, 10.0, 0.8),
            MarkStyle::Plain,
        );
        for y in 0..12 {
            for x in 0..12 {
                assert!((buffer.ink(x, y) - buffer.ink(y, x)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_rotation_angle() {
        let mark = Mark::at(0.0, 0.0, 10.0, 1.0);
        assert!((angle(&mark, MarkStyle::Rotated) - PI / 12.0).abs() < 1e-6);
        assert_eq!(angle(&mark, MarkStyle::Plain), 0.0);
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
