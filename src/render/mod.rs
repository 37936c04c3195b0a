//! # Rendering Module
//!
//! Turns a [`Raster`] into a halftone: a white canvas of the same size with one
//! black mark per grid cell.
//!
//! ## Pipeline
//!
//! ```text
//! Raster ──▶ sampler ──▶ (x, y, brightness) ──▶ curve ──▶ factor ──▶ drawer ──▶ InkBuffer ──▶ Raster
//!            row-major                           per pattern         per pattern
//! ```
//!
//! Each call is pure: the same image and [`RenderConfig`] always give
//! byte-identical output.
//!
//! ## Modules
//!
//! - [`canvas`]: f32 ink buffer and clipped shape compositing
//! - [`config`]: [`RenderConfig`] and [`MarkStyle`]
//! - [`mark`]: per-cell [`Mark`] geometry
//!
//! ## Usage Example
//!
//! ```
//! use halftoner::pattern::PatternKind;
//! use halftoner::raster::Raster;
//! use halftoner::render::{self, RenderConfig};
//!
//! let image = Raster::filled(20, 20, [0, 0, 0, 255]);
//! let output = render::render(&image, &RenderConfig::new(10, PatternKind::Square))?;
//!
//! assert_eq!(output.dimensions(), (20, 20));
//! assert_eq!(output.rgba(0, 0), [0, 0, 0, 255]);
//! # Ok::<(), halftoner::HalftoneError>(())
//! ```
//!
//! ## Zero-area images
//!
//! A raster with zero width or height renders to an empty raster of the same
//! dimensions. It is not an error.

pub mod canvas;
pub mod config;
pub mod mark;

pub use canvas::{InkBuffer, InkCanvas};
pub use config::{DEFAULT_CELL_SIZE, MarkStyle, RenderConfig};
pub use mark::Mark;

use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::error::{HalftoneError, Result};
use crate::raster::Raster;
use crate::sampler::{self, grid_dimensions};

/// Shared flag for stopping a render between cells.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Render `image` sequentially.
pub fn render(image: &Raster, config: &RenderConfig) -> Result<Raster> {
    render_cells(image, config, None)
}

/// Render `image`, checking `cancel` before each cell.
///
/// Returns [`HalftoneError::Cancelled`] and no output if the flag is raised.
pub fn render_with_cancel(image: &Raster, config: &RenderConfig, cancel: &CancelFlag) -> Result<Raster> {
    render_cells(image, config, Some(cancel))
}

fn render_cells(image: &Raster, config: &RenderConfig, cancel: Option<&CancelFlag>) -> Result<Raster> {
    config.validate()?;
    let (width, height) = image.dimensions();
    if image.is_empty() {
        return Ok(Raster::white(width, height));
    }

    let cells = sampler::sample_with(image, config.cell_size, config.sampling)?;
    debug!(
        width,
        height,
        cell_size = config.cell_size,
        pattern = %config.pattern,
        cells = cells.len(),
        "Rendering halftone"
    );

    let draw = config.pattern.drawer();
    let mut buffer = InkBuffer::new(width, height);
    let mut canvas = buffer.canvas();

    for cell in cells {
        if cancel.is_some_and(CancelFlag::is_cancelled) {
            debug!("Halftone render cancelled");
            return Err(HalftoneError::Cancelled);
        }
        draw(&mut canvas, &config.mark_for(&cell), config.style);
    }

    Ok(buffer.to_raster())
}

/// Render `image` on the rayon thread pool.
///
/// The output is split into bands one cell row tall. Each band is written by a
/// single worker, which replays the marks of every cell row close enough to
/// reach it, in row-major order. Per pixel, marks are composited in the same
/// order as [`render`], so both produce identical bytes.
pub fn render_parallel(image: &Raster, config: &RenderConfig) -> Result<Raster> {
    config.validate()?;
    let (width, height) = image.dimensions();
    if image.is_empty() {
        return Ok(Raster::white(width, height));
    }

    let cell_size = config.cell_size;
    let (columns, rows) = grid_dimensions(width, height, cell_size);
    let marks: Vec<Mark> = sampler::sample_with(image, cell_size, config.sampling)?
        .map(|cell| config.mark_for(&cell))
        .collect();

    // Cell rows on either side whose marks can spill into a band.
    let halo = (config.pattern.reach(cell_size as f32) / cell_size as f32).ceil() as usize;
    debug!(
        width,
        height,
        cell_size,
        pattern = %config.pattern,
        cells = marks.len(),
        halo,
        "Rendering halftone in parallel"
    );

    let draw = config.pattern.drawer();
    let style = config.style;
    let columns = columns as usize;
    let last_row = rows as usize - 1;
    let band_len = width as usize * cell_size as usize;

    let mut buffer = InkBuffer::new(width, height);
    buffer
        .ink_mut()
        .par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(band, ink)| {
            let mut canvas = InkCanvas::new(ink, width, band as u32 * cell_size);
            let first = band.saturating_sub(halo);
            let last = (band + halo).min(last_row);
            for row in first..=last {
                for mark in &marks[row * columns..(row + 1) * columns] {
                    draw(&mut canvas, mark, style);
                }
            }
        });

    Ok(buffer.to_raster())
}
