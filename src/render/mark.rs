//! A single cell's mark, ready to draw.

use crate::sampler::CellSample;

/// Where and how large to draw one mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// Center x in image coordinates (cell origin + cell_size / 2).
    pub cx: f32,
    /// Center y in image coordinates.
    pub cy: f32,
    pub cell_size: f32,
    /// 0.0 = no mark, 1.0 = largest mark.
    pub factor: f32,
}

impl Mark {
    pub fn new(cell: &CellSample, cell_size: u32, factor: f32) -> Self {
        let size = cell_size as f32;
        Self {
            cx: cell.x as f32 + size / 2.0,
            cy: cell.y as f32 + size / 2.0,
            cell_size: size,
            factor,
        }
    }

    /// A mark centered at (cx, cy).
    pub fn at(cx: f32, cy: f32, cell_size: f32, factor: f32) -> Self {
        Self {
            cx,
            cy,
            cell_size,
            factor,
        }
    }
}
