//! # Patterns
//!
//! The five mark shapes a cell can be rendered as. Each shape lives in its own
//! module and exposes the same three pieces:
//!
//! - `size(cell_size, factor)`: the mark's characteristic length in pixels
//!   (radius for dots, side for squares and triangles, length for strokes)
//! - `MIN_SIZE`: marks whose size is at or below this are not drawn
//! - `draw(canvas, mark, style)`: composite the mark onto the ink canvas
//!
//! [`PatternKind`] is a closed enum; [`PatternKind::drawer`] picks the handler
//! once per render rather than once per cell.
//!
//! ## Adding a New Pattern
//!
//! 1. Create `src/pattern/myshape.rs` with `size`, `MIN_SIZE`, `reach` and `draw`
//! 2. Add a variant to [`PatternKind`] and wire it into every `match`
//! 3. Add its name to [`PATTERNS`] and its curve to [`PatternKind::tuning`]

pub mod cross;
pub mod dot;
pub mod line;
pub mod square;
pub mod triangle;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HalftoneError;
use crate::render::{InkCanvas, Mark, MarkStyle};

/// All available pattern names, in display order.
pub const PATTERNS: &[&str] = &["dot", "square", "triangle", "line", "cross"];

/// Signature shared by the shape drawers.
pub type Drawer = fn(&mut InkCanvas<'_>, &Mark, MarkStyle);

/// Which mark each cell is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Dot,
    Square,
    Triangle,
    Line,
    Cross,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Dot,
        PatternKind::Square,
        PatternKind::Triangle,
        PatternKind::Line,
        PatternKind::Cross,
    ];

    /// Pattern name (lowercase, e.g., "dot").
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Dot => "dot",
            PatternKind::Square => "square",
            PatternKind::Triangle => "triangle",
            PatternKind::Line => "line",
            PatternKind::Cross => "cross",
        }
    }

    /// Response curve `(exponent, scale)` tuned for this shape.
    ///
    /// | pattern  | exponent | scale |
    /// |----------|----------|-------|
    /// | dot      | 1.2      | 0.85  |
    /// | square   | 1.1      | 0.90  |
    /// | triangle | 0.9      | 0.85  |
    /// | line     | 1.3      | 0.80  |
    /// | cross    | 1.1      | 0.75  |
    pub fn tuning(self) -> (f32, f32) {
        match self {
            PatternKind::Dot => (1.2, 0.85),
            PatternKind::Square => (1.1, 0.90),
            PatternKind::Triangle => (0.9, 0.85),
            PatternKind::Line => (1.3, 0.80),
            PatternKind::Cross => (1.1, 0.75),
        }
    }

    /// The shape's drawing routine.
    pub fn drawer(self) -> Drawer {
        match self {
            PatternKind::Dot => dot::draw,
            PatternKind::Square => square::draw,
            PatternKind::Triangle => triangle::draw,
            PatternKind::Line => line::draw,
            PatternKind::Cross => cross::draw,
        }
    }

    /// Characteristic size of a mark in pixels.
    pub fn mark_size(self, cell_size: f32, factor: f32) -> f32 {
        match self {
            PatternKind::Dot => dot::size(cell_size, factor),
            PatternKind::Square => square::size(cell_size, factor),
            PatternKind::Triangle => triangle::size(cell_size, factor),
            PatternKind::Line => line::size(cell_size, factor),
            PatternKind::Cross => cross::size(cell_size, factor),
        }
    }

    /// Sizes at or below this are not drawn.
    pub fn min_size(self) -> f32 {
        match self {
            PatternKind::Dot => dot::MIN_SIZE,
            PatternKind::Square => square::MIN_SIZE,
            PatternKind::Triangle => triangle::MIN_SIZE,
            PatternKind::Line => line::MIN_SIZE,
            PatternKind::Cross => cross::MIN_SIZE,
        }
    }

    /// Whether a mark with this factor would be drawn at all.
    pub fn is_visible(self, cell_size: f32, factor: f32) -> bool {
        self.mark_size(cell_size, factor) > self.min_size()
    }

    /// Upper bound on how far any mark of this kind extends from its center,
    /// anti-aliasing included.
    pub fn reach(self, cell_size: f32) -> f32 {
        let shape = match self {
            PatternKind::Dot => dot::reach(cell_size),
            PatternKind::Square => square::reach(cell_size),
            PatternKind::Triangle => triangle::reach(cell_size),
            PatternKind::Line => line::reach(cell_size),
            PatternKind::Cross => cross::reach(cell_size),
        };
        shape + 1.0
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = HalftoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        by_name(s).ok_or_else(|| {
            HalftoneError::InvalidConfig(format!(
                "unknown pattern '{}' (expected one of: {})",
                s,
                PATTERNS.join(", ")
            ))
        })
    }
}

/// Get a pattern by name (case-insensitive).
pub fn by_name(name: &str) -> Option<PatternKind> {
    match name.trim().to_lowercase().as_str() {
        "dot" | "dots" | "circle" => Some(PatternKind::Dot),
        "square" | "squares" => Some(PatternKind::Square),
        "triangle" | "triangles" => Some(PatternKind::Triangle),
        "line" | "lines" => Some(PatternKind::Line),
        "cross" | "crosses" => Some(PatternKind::Cross),
        _ => None,
    }
}

/// List all available pattern names.
pub fn list_patterns() -> &'static [&'static str] {
    PATTERNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_patterns_matches_all() {
        let names: Vec<&str> = PatternKind::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, list_patterns());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("dot"), Some(PatternKind::Dot));
        assert_eq!(by_name("CROSS"), Some(PatternKind::Cross)); // Case insensitive
        assert_eq!(by_name(" lines "), Some(PatternKind::Line));
        assert_eq!(by_name("hexagon"), None);
    }

    #[test]
    fn test_from_str_unknown_is_invalid_config() {
        let err = "spiral".parse::<PatternKind>().unwrap_err();
        assert!(matches!(err, HalftoneError::InvalidConfig(_)));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.to_string().parse::<PatternKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PatternKind::Triangle).unwrap();
        assert_eq!(json, "\"triangle\"");
        let kind: PatternKind = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(kind, PatternKind::Square);
    }

    #[test]
    fn test_size_grows_with_factor() {
        for kind in PatternKind::ALL {
            let mut last = -1.0;
            for step in 0..=20 {
                let size = kind.mark_size(12.0, step as f32 / 20.0);
                assert!(size >= last, "{kind} size shrank at step {step}");
                last = size;
            }
        }
    }

    #[test]
    fn test_zero_factor_is_invisible() {
        for kind in PatternKind::ALL {
            assert!(!kind.is_visible(30.0, 0.0), "{kind} drew a zero-factor mark");
        }
    }

    #[test]
    fn test_dot_white_cell_threshold() {
        // factor 0.15 at cell 10 gives radius 0.75, just above the 0.5 cutoff
        assert!(PatternKind::Dot.is_visible(10.0, 0.15));
        // factor 0.09 gives radius 0.45, which is suppressed
        assert!(!PatternKind::Dot.is_visible(10.0, 0.09));
    }
}
