//! Ink compositing buffer.
//!
//! Marks are accumulated as ink coverage in an f32 buffer (0.0 = white paper,
//! 1.0 = solid black). Every mark is black, so compositing a mark with alpha `a`
//! over existing ink `c` is plain source-over:
//!
//! ```text
//! c' = c + (1 - c) * a
//! ```
//!
//! The buffer is converted to an opaque RGBA [`Raster`] once all marks are in.

use crate::geometry::{Rotation, coverage};
use crate::raster::Raster;

/// Whole-image ink buffer.
#[derive(Debug, Clone)]
pub struct InkBuffer {
    width: u32,
    height: u32,
    ink: Vec<f32>,
}

impl InkBuffer {
    /// A blank (all white) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ink: vec![0.0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ink coverage at (x, y).
    #[inline]
    pub fn ink(&self, x: u32, y: u32) -> f32 {
        self.ink[y as usize * self.width as usize + x as usize]
    }

    /// Drawing view over the whole buffer.
    pub fn canvas(&mut self) -> InkCanvas<'_> {
        InkCanvas::new(&mut self.ink, self.width, 0)
    }

    /// Raw coverage values, row-major.
    pub fn ink_mut(&mut self) -> &mut [f32] {
        &mut self.ink
    }

    /// Convert to an opaque grayscale RGBA raster.
    pub fn to_raster(&self) -> Raster {
        let mut data = Vec::with_capacity(self.ink.len() * 4);
        for &ink in &self.ink {
            let gray = ((1.0 - ink.clamp(0.0, 1.0)) * 255.0).round() as u8;
            data.extend_from_slice(&[gray, gray, gray, 255]);
        }
        Raster::from_rgba(self.width, self.height, data)
            .unwrap_or_else(|_| Raster::white(self.width, self.height))
    }
}

/// Drawing view over a horizontal band of an [`InkBuffer`].
///
/// Coordinates are always full-image coordinates; writes outside the band
/// (or outside the image) are clipped.
#[derive(Debug)]
pub struct InkCanvas<'a> {
    ink: &'a mut [f32],
    width: u32,
    top: u32,
    rows: u32,
}

impl<'a> InkCanvas<'a> {
    /// Wrap `ink`, which holds whole rows starting at image row `top`.
    pub fn new(ink: &'a mut [f32], width: u32, top: u32) -> Self {
        let rows = if width == 0 {
            0
        } else {
            (ink.len() / width as usize) as u32
        };
        Self {
            ink,
            width,
            top,
            rows,
        }
    }

    /// First image row covered by this view.
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Number of image rows covered by this view.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Composite a black shape.
    ///
    /// # Parameters
    /// - `cx`, `cy`: Shape center in image coordinates
    /// - `angle`: Rotation of the shape's local frame, radians
    /// - `extent`: Distance from the center to the farthest point of the shape
    /// - `opacity`: Alpha multiplier in [0, 1]
    /// - `sd`: Signed distance of a local-frame point to the shape
    pub fn fill<F>(&mut self, cx: f32, cy: f32, angle: f32, extent: f32, opacity: f32, sd: F)
    where
        F: Fn(f32, f32) -> f32,
    {
        if opacity <= 0.0 || self.rows == 0 {
            return;
        }

        let margin = extent + 1.0;
        let bottom = self.top + self.rows;
        let x0 = clip(cx - margin, 0, self.width, f32::floor);
        let x1 = clip(cx + margin, 0, self.width, f32::ceil);
        let y0 = clip(cy - margin, self.top, bottom, f32::floor);
        let y1 = clip(cy + margin, self.top, bottom, f32::ceil);

        let to_local = Rotation::new(angle).inverse();
        let width = self.width as usize;

        for py in y0..y1 {
            let row = (py - self.top) as usize * width;
            let dy = py as f32 + 0.5 - cy;
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let (lx, ly) = to_local.apply(dx, dy);
                let alpha = coverage(sd(lx, ly)) * opacity;
                if alpha <= 0.0 {
                    continue;
                }
                let cell = &mut self.ink[row + px as usize];
                *cell += (1.0 - *cell) * alpha;
            }
        }
    }
}

/// Round a coordinate and clamp it to [lo, hi].
#[inline]
fn clip(v: f32, lo: u32, hi: u32, round: fn(f32) -> f32) -> u32 {
    let r = round(v);
    if r <= lo as f32 {
        lo
    } else if r >= hi as f32 {
        hi
    } else {
        r as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::sd_box;

    #[test]
    fn test_new_buffer_is_white() {
        let buffer = InkBuffer::new(3, 2);
        let raster = buffer.to_raster();
        assert_eq!(raster.dimensions(), (3, 2));
        assert!(raster.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_fill_box_exact_pixels() {
        let mut buffer = InkBuffer::new(6, 6);
        buffer
            .canvas()
            .fill(3.0, 3.0, 0.0, 2.0, 1.0, |x, y| sd_box(x, y, 1.0, 1.0));

        // The 2x2 box spanning [2, 4) is fully inked, nothing else is touched.
        for y in 0..6 {
            for x in 0..6 {
                let expected = if (2..4).contains(&x) && (2..4).contains(&y) { 1.0 } else { 0.0 };
                assert_eq!(buffer.ink(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_clips_at_edges() {
        let mut buffer = InkBuffer::new(4, 4);
        buffer
            .canvas()
            .fill(0.0, 0.0, 0.0, 10.0, 1.0, |x, y| sd_box(x, y, 10.0, 10.0));
        assert!((0..4).all(|y| (0..4).all(|x| buffer.ink(x, y) == 1.0)));
    }

    #[test]
    fn test_opacity_composites_source_over() {
        let mut buffer = InkBuffer::new(2, 2);
        let mut canvas = buffer.canvas();
        canvas.fill(1.0, 1.0, 0.0, 2.0, 0.5, |x, y| sd_box(x, y, 2.0, 2.0));
        canvas.fill(1.0, 1.0, 0.0, 2.0, 0.5, |x, y| sd_box(x, y, 2.0, 2.0));
        assert!((buffer.ink(0, 0) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_band_view_uses_image_coordinates() {
        let mut buffer = InkBuffer::new(4, 4);
        {
            // Rows 2..4 only
            let band = &mut buffer.ink_mut()[8..];
            let mut canvas = InkCanvas::new(band, 4, 2);
            assert_eq!(canvas.rows(), 2);
            canvas.fill(2.0, 2.0, 0.0, 2.0, 1.0, |x, y| sd_box(x, y, 2.0, 2.0));
        }
        assert_eq!(buffer.ink(0, 1), 0.0);
        assert_eq!(buffer.ink(0, 2), 1.0);
        assert_eq!(buffer.ink(3, 3), 1.0);
    }

    #[test]
    fn test_half_covered_pixel_is_mid_gray() {
        let mut buffer = InkBuffer::new(1, 1);
        // Box edge passes through the pixel center
        buffer
            .canvas()
            .fill(0.0, 0.5, 0.0, 1.0, 1.0, |x, y| sd_box(x, y, 0.5, 10.0));
        let raster = buffer.to_raster();
        assert_eq!(raster.rgba(0, 0), [128, 128, 128, 255]);
    }
}
