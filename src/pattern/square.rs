//! # Square
//!
//! An opaque square, `cell_size * factor` on a side. A full-factor square
//! covers its cell exactly, so solid black input renders as solid black.
//! The rotated style turns it by `factor * PI/8`, darker cells twisting more.

use std::f32::consts::{FRAC_PI_8, SQRT_2};

use crate::geometry::sd_box;
use crate::render::{InkCanvas, Mark, MarkStyle};

/// Sides at or below this are not drawn.
pub const MIN_SIZE: f32 = 0.5;

/// Side length.
#[inline]
pub fn size(cell_size: f32, factor: f32) -> f32 {
    cell_size * factor
}

#[inline]
pub fn angle(mark: &Mark, style: MarkStyle) -> f32 {
    if style.is_rotated() {
        mark.factor * FRAC_PI_8
    } else {
        0.0
    }
}

/// Farthest a square can extend from its center (half diagonal).
#[inline]
pub fn reach(cell_size: f32) -> f32 {
    cell_size / 2.0 * SQRT_2
}

pub fn draw(canvas: &mut InkCanvas<'_>, mark: &Mark, style: MarkStyle) {
    let side = size(mark.cell_size, mark.factor);
    if side <= MIN_SIZE {
        return;
    }
    let half = side / 2.0;
    let extent = if style.is_rotated() { half * SQRT_2 } else { half };
    canvas.fill(mark.cx, mark.cy, angle(mark, style), extent, 1.0, |x, y| {
        sd_box(x, y, half, half)
    });
}
