//! # Block Sampler
//!
//! Partitions a raster into a grid of `cell_size`-pixel square cells and yields
//! one brightness value per cell.
//!
//! ## Traversal
//!
//! Cells are visited row-major: `y` is the outer loop, `x` the inner one, with
//! origins at multiples of `cell_size`. The final row and column may be partial
//! cells; they are sampled like any other.
//!
//! ```text
//!   x: 0    10   20  ... (W step cell_size)
//! y:0  [0]  [1]  [2]
//!  10  [3]  [4]  [5]
//!  ..
//! ```
//!
//! Drawing order follows this order, so it is part of the rendered output.
//!
//! ## Sampling
//!
//! [`SamplingMode::Point`] reads the single pixel at the cell origin: a point
//! sample, not a block average. [`SamplingMode::Area`] averages every in-bounds
//! pixel of the cell instead and produces visibly different output.
//!
//! Brightness is the unweighted mean of R, G and B, in [0, 255].

use std::iter::FusedIterator;

use crate::error::{HalftoneError, Result};
use crate::raster::Raster;

/// Brightness of one grid cell, keyed by the cell's top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    pub x: u32,
    pub y: u32,
    pub brightness: f32,
}

/// How a cell's brightness is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// The pixel at the cell origin.
    #[default]
    Point,
    /// Mean over all in-bounds pixels of the cell.
    Area,
}

/// Number of cell columns and rows covering a `width` x `height` raster.
///
/// Returns (0, 0) for a zero cell size.
pub fn grid_dimensions(width: u32, height: u32, cell_size: u32) -> (u32, u32) {
    if cell_size == 0 {
        return (0, 0);
    }
    (width.div_ceil(cell_size), height.div_ceil(cell_size))
}

/// Lazy, single-pass iterator over the cells of a raster.
///
/// Call [`sample`] again for a fresh pass.
#[derive(Debug)]
pub struct BlockSampler<'a> {
    image: &'a Raster,
    cell_size: u32,
    mode: SamplingMode,
    columns: u32,
    total: u64,
    next: u64,
}

/// Sample `image` with point sampling.
pub fn sample(image: &Raster, cell_size: u32) -> Result<BlockSampler<'_>> {
    sample_with(image, cell_size, SamplingMode::Point)
}

/// Sample `image` with an explicit [`SamplingMode`].
pub fn sample_with(image: &Raster, cell_size: u32, mode: SamplingMode) -> Result<BlockSampler<'_>> {
    if cell_size == 0 {
        return Err(HalftoneError::InvalidConfig(
            "cell size must be at least 1".to_string(),
        ));
    }

    let (columns, rows) = grid_dimensions(image.width(), image.height(), cell_size);

    Ok(BlockSampler {
        image,
        cell_size,
        mode,
        columns,
        total: columns as u64 * rows as u64,
        next: 0,
    })
}

impl BlockSampler<'_> {
    /// Cell columns and rows of the grid being walked.
    pub fn grid(&self) -> (u32, u32) {
        let rows = if self.columns == 0 {
            0
        } else {
            (self.total / self.columns as u64) as u32
        };
        (self.columns, rows)
    }

    fn measure(&self, x: u32, y: u32) -> f32 {
        match self.mode {
            SamplingMode::Point => self.image.brightness(x, y),
            SamplingMode::Area => {
                let x_end = (x + self.cell_size).min(self.image.width());
                let y_end = (y + self.cell_size).min(self.image.height());
                let mut sum = 0.0f64;
                let mut count = 0u64;
                for py in y..y_end {
                    for px in x..x_end {
                        let [r, g, b] = self.image.rgb(px, py);
                        sum += r as f64 + g as f64 + b as f64;
                        count += 1;
                    }
                }
                (sum / (3.0 * count as f64)) as f32
            }
        }
    }
}

impl Iterator for BlockSampler<'_> {
    type Item = CellSample;

    fn next(&mut self) -> Option<CellSample> {
        if self.next >= self.total {
            return None;
        }

        let row = (self.next / self.columns as u64) as u32;
        let col = (self.next % self.columns as u64) as u32;
        self.next += 1;

        let x = col * self.cell_size;
        let y = row * self.cell_size;

        Some(CellSample {
            x,
            y,
            brightness: self.measure(x, y),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BlockSampler<'_> {}

impl FusedIterator for BlockSampler<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> Raster {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let v = ((x * 7 + y * 13) % 256) as u8;
            Rgb([v, v, v])
        });
        Raster::from(img)
    }

    #[test]
    fn test_grid_coverage_counts_partial_cells() {
        let img = Raster::white(105, 50);
        let sampler = sample(&img, 10).unwrap();
        assert_eq!(sampler.grid(), (11, 5));
        assert_eq!(sampler.len(), 55);
        assert_eq!(sampler.count(), 55);
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let img = Raster::white(4, 4);
        assert!(matches!(
            sample(&img, 0),
            Err(HalftoneError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_row_major_order() {
        let img = Raster::white(25, 15);
        let origins: Vec<(u32, u32)> = sample(&img, 10).unwrap().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            origins,
            vec![(0, 0), (10, 0), (20, 0), (0, 10), (10, 10), (20, 10)]
        );
    }

    #[test]
    fn test_point_sample_reads_origin_pixel_only() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        img.put_pixel(0, 0, Rgb([30, 60, 90]));
        let raster = Raster::from(img);

        let cells: Vec<CellSample> = sample(&raster, 4).unwrap().collect();
        assert_eq!(cells.len(), 1);
        assert!((cells[0].brightness - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_area_sample_averages_in_bounds_pixels() {
        let mut img = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
        img.put_pixel(2, 2, Rgb([255, 255, 255]));
        let raster = Raster::from(img);

        // Top-left cell is 2x2, all black; the corner cell is a 1x1 partial cell.
        let cells: Vec<CellSample> = sample_with(&raster, 2, SamplingMode::Area).unwrap().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].brightness, 0.0);
        assert!((cells[3].brightness - 255.0).abs() < 1e-4);
    }

    #[test]
    fn test_modes_share_grid() {
        let img = gradient(33, 17);
        let point: Vec<(u32, u32)> = sample(&img, 5).unwrap().map(|c| (c.x, c.y)).collect();
        let area: Vec<(u32, u32)> = sample_with(&img, 5, SamplingMode::Area)
            .unwrap()
            .map(|c| (c.x, c.y))
            .collect();
        assert_eq!(point, area);
    }

    #[test]
    fn test_fresh_pass_repeats_values() {
        let img = gradient(20, 20);
        let first: Vec<CellSample> = sample(&img, 3).unwrap().collect();
        let second: Vec<CellSample> = sample(&img, 3).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_image_yields_nothing() {
        let img = Raster::white(0, 10);
        let mut sampler = sample(&img, 4).unwrap();
        assert_eq!(sampler.len(), 0);
        assert!(sampler.next().is_none());
    }

    #[test]
    fn test_size_hint_shrinks() {
        let img = Raster::white(10, 10);
        let mut sampler = sample(&img, 5).unwrap();
        assert_eq!(sampler.len(), 4);
        sampler.next();
        assert_eq!(sampler.len(), 3);
    }
}
