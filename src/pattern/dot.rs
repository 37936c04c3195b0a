//! # Dot
//!
//! A filled circle whose radius follows the cell's darkness.
//!
//! ```text
//! radius  = cell_size / 2 * factor
//! opacity = min(1, factor + 0.1)
//! ```
//!
//! Light cells get small, translucent dots, which softens highlights. Circles
//! are rotation invariant, so [`MarkStyle`] has no effect.

use crate::geometry::sd_circle;
use crate::render::{InkCanvas, Mark, MarkStyle};

/// Radii at or below this are not drawn.
pub const MIN_SIZE: f32 = 0.5;

/// Dot radius.
#[inline]
pub fn size(cell_size: f32, factor: f32) -> f32 {
    cell_size / 2.0 * factor
}

#[inline]
pub fn opacity(factor: f32) -> f32 {
    (factor + 0.1).min(1.0)
}

/// Farthest a dot can extend from its center.
#[inline]
pub fn reach(cell_size: f32) -> f32 {
    cell_size / 2.0
}

pub fn draw(canvas: &mut InkCanvas<'_>, mark: &Mark, _style: MarkStyle) {
    let radius = size(mark.cell_size, mark.factor);
    if radius <= MIN_SIZE {
        return;
    }
    canvas.fill(mark.cx, mark.cy, 0.0, radius, opacity(mark.factor), |x, y| {
        sd_circle(x, y, radius)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InkBuffer;

    fn draw_one(factor: f32) -> InkBuffer {
        let mut buffer = InkBuffer::new(10, 10);
        draw(
            &mut buffer.canvas(),
            &Mark::at(5.0, 5.0, 10.0, factor),
            MarkStyle::Plain,
        );
        buffer
    }

    #[test]
    fn test_full_dot_is_solid_in_center() {
        let buffer = draw_one(1.0);
        assert_eq!(buffer.ink(5, 5), 1.0);
        assert_eq!(buffer.ink(4, 4), 1.0);
        // Corners lie outside the inscribed circle
        assert_eq!(buffer.ink(0, 0), 0.0);
        assert_eq!(buffer.ink(9, 9), 0.0);
    }

    #[test]
    fn test_small_dot_is_translucent() {
        // radius 0.75, opacity 0.25
        let buffer = draw_one(0.15);
        let peak = (0..10)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .map(|(x, y)| buffer.ink(x, y))
            .fold(0.0f32, f32::max);
        assert!(peak > 0.0);
        assert!(peak <= 0.25 + 1e-6, "peak ink {peak}");
    }

    #[test]
    fn test_suppressed_below_threshold() {
        let buffer = draw_one(0.09);
        assert!((0..10).all(|y| (0..10).all(|x| buffer.ink(x, y) == 0.0)));
    }

    #[test]
    fn test_opacity_caps_at_one() {
        assert!((opacity(0.5) - 0.6).abs() < 1e-6);
        assert_eq!(opacity(0.95), 1.0);
        assert_eq!(opacity(1.0), 1.0);
    }
}
