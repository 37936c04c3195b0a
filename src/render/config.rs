//! Render configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{HalftoneError, Result};
use crate::pattern::PatternKind;
use crate::response::ResponseCurve;
use crate::sampler::{CellSample, SamplingMode};

use super::Mark;

/// Default cell size in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// Whether marks get the per-shape rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkStyle {
    /// Axis-aligned marks.
    #[default]
    Plain,
    /// Square: `factor * PI/8`, triangle: `(cx + cy) * 0.01`,
    /// line: `(cx + cy) * 0.05`, cross: `factor * PI/12`. Dots are unaffected.
    Rotated,
}

impl MarkStyle {
    #[inline]
    pub fn is_rotated(self) -> bool {
        self == MarkStyle::Rotated
    }
}

impl fmt::Display for MarkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkStyle::Plain => f.write_str("plain"),
            MarkStyle::Rotated => f.write_str("rotated"),
        }
    }
}

impl FromStr for MarkStyle {
    type Err = HalftoneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(MarkStyle::Plain),
            "rotated" => Ok(MarkStyle::Rotated),
            _ => Err(HalftoneError::InvalidConfig(format!(
                "unknown style '{}' (expected plain or rotated)",
                s
            ))),
        }
    }
}

/// Parameters of one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Cell edge length in pixels. Must be at least 1.
    pub cell_size: u32,
    pub pattern: PatternKind,
    pub curve: ResponseCurve,
    pub style: MarkStyle,
    pub sampling: SamplingMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE, PatternKind::default())
    }
}

impl RenderConfig {
    /// Tuned curve, plain marks, point sampling.
    pub fn new(cell_size: u32, pattern: PatternKind) -> Self {
        Self {
            cell_size,
            pattern,
            curve: ResponseCurve::default(),
            style: MarkStyle::default(),
            sampling: SamplingMode::default(),
        }
    }

    pub fn with_curve(mut self, curve: ResponseCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_style(mut self, style: MarkStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(HalftoneError::InvalidConfig(
                "cell size must be at least 1".to_string(),
            ));
        }
        self.curve.validate()
    }

    /// The mark a sampled cell turns into.
    #[inline]
    pub fn mark_for(&self, cell: &CellSample) -> Mark {
        let factor = self.curve.factor(self.pattern, cell.brightness);
        Mark::new(cell, self.cell_size, factor)
    }
}
