//! # Triangle
//!
//! An opaque equilateral triangle, `cell_size * factor` on a side, apex up,
//! centered on its bounding box.
//!
//! ```text
//!        /\          apex     (0, -h/2)
//!       /  \
//!      /____\        base     (-s/2, h/2) .. (s/2, h/2)
//!
//!   h = s * sqrt(3) / 2
//! ```
//!
//! The rotated style turns each triangle by `(cx + cy) * 0.01`, so the angle
//! drifts across the image diagonal.

use crate::geometry::sd_convex_polygon;
use crate::render::{InkCanvas, Mark, MarkStyle};

/// Sides at or below this are not drawn.
pub const MIN_SIZE: f32 = 0.5;

const HEIGHT_RATIO: f32 = 0.866_025_4; // sqrt(3) / 2

/// Side length.
#[inline]
pub fn size(cell_size: f32, factor: f32) -> f32 {
    cell_size * factor
}

#[inline]
pub fn angle(mark: &Mark, style: MarkStyle) -> f32 {
    if style.is_rotated() {
        (mark.cx + mark.cy) * 0.01
    } else {
        0.0
    }
}

/// Local-frame vertices for a triangle of side `side`.
pub fn vertices(side: f32) -> [(f32, f32); 3] {
    let half_h = side * HEIGHT_RATIO / 2.0;
    let half_s = side / 2.0;
    [(0.0, -half_h), (-half_s, half_h), (half_s, half_h)]
}

/// Farthest a triangle can extend from its center (a base corner).
#[inline]
pub fn reach(cell_size: f32) -> f32 {
    let half_h = cell_size * HEIGHT_RATIO / 2.0;
    (cell_size / 2.0).hypot(half_h)
}

pub fn draw(canvas: &mut InkCanvas<'_>, mark: &Mark, style: MarkStyle) {
    let side = size(mark.cell_size, mark.factor);
    if side <= MIN_SIZE {
        return;
    }
    let corners = vertices(side);
    canvas.fill(
        mark.cx,
        mark.cy,
        angle(mark, style),
        reach(side),
        1.0,
        |x, y| sd_convex_polygon(x, y, &corners),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InkBuffer;

    fn row_ink(buffer: &InkBuffer, y: u32) -> f32 {
        (0..buffer.width()).map(|x| buffer.ink(x, y)).sum()
    }

    #[test]
    fn test_apex_points_up() {
        let mut buffer = InkBuffer::new(20, 20);
        draw(
            &mut buffer.canvas(),
            &Mark::at(10.0, 10.0, 20.0, 1.0),
            MarkStyle::Plain,
        );
        // Rows near the base carry more ink than rows near the apex
        assert!(row_ink(&buffer, 16) > row_ink(&buffer, 4) * 2.0);
        assert_eq!(buffer.ink(10, 10), 1.0);
    }

    #[test]
    fn test_horizontally_symmetric() {
        let mut buffer = InkBuffer::new(20, 20);
        draw(
            &mut buffer.canvas(),
            &Mark::at(10.0, 10.0, 16.0, 0.9),
            MarkStyle::Plain,
        );
        for y in 0..20 {
            for x in 0..10 {
                let left = buffer.ink(x, y);
                let right = buffer.ink(19 - x, y);
                assert!((left - right).abs() < 1e-5, "row {y}: {left} vs {right}");
            }
        }
    }

    #[test]
    fn test_vertices_equilateral() {
        let [a, b, c] = vertices(6.0);
        let ab = (a.0 - b.0).hypot(a.1 - b.1);
        let bc = (b.0 - c.0).hypot(b.1 - c.1);
        let ca = (c.0 - a.0).hypot(c.1 - a.1);
        assert!((ab - 6.0).abs() < 1e-4);
        assert!((bc - 6.0).abs() < 1e-4);
        assert!((ca - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_depends_on_position() {
        let near = Mark::at(5.0, 5.0, 10.0, 1.0);
        let far = Mark::at(105.0, 55.0, 10.0, 1.0);
        assert!((angle(&near, MarkStyle::Rotated) - 0.1).abs() < 1e-6);
        assert!((angle(&far, MarkStyle::Rotated) - 1.6).abs() < 1e-5);
        assert_eq!(angle(&far, MarkStyle::Plain), 0.0);
    }

    #[test]
    fn test_suppressed_below_threshold() {
        let mut buffer = InkBuffer::new(10, 10);
        draw(
            &mut buffer.canvas(),
            &Mark::at(5.0, 5.0, 10.0, 0.04),
            MarkStyle::Plain,
        );
        assert!((0..10).all(|y| row_ink(&buffer, y) == 0.0));
    }
}
