//! # Brightness Response
//!
//! Maps a cell's brightness to the mark factor that sizes it.
//!
//! ```text
//! normalized = brightness / 255
//! adjusted   = curve(normalized)        in [0, 1]
//! factor     = 1 - adjusted             0 = no mark, 1 = largest mark
//! ```
//!
//! Darker cells therefore get larger (or more opaque) marks. The curve is a
//! strategy chosen per render:
//!
//! | Curve | `adjusted` |
//! |-------|------------|
//! | [`ResponseCurve::Tuned`] | `normalized^p * s`, with `(p, s)` from [`PatternKind::tuning`] |
//! | [`ResponseCurve::Linear`] | `normalized` |
//! | [`ResponseCurve::Power`] | `normalized^exponent * scale` |
//!
//! The tuned scales are all below 1, so even pure white leaves a small mark
//! for some shapes (a 0.75 px dot at cell size 10).

use std::fmt;
use std::str::FromStr;

use crate::error::{HalftoneError, Result};
use crate::pattern::PatternKind;

/// Brightness-to-factor strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResponseCurve {
    /// Per-pattern power curve.
    #[default]
    Tuned,
    /// No curve: factor is the inverted normalized brightness.
    Linear,
    /// A single power curve applied to every pattern.
    Power { exponent: f32, scale: f32 },
}

impl ResponseCurve {
    /// Reject curves that would produce non-finite or negative output.
    pub fn validate(&self) -> Result<()> {
        if let ResponseCurve::Power { exponent, scale } = *self {
            if !exponent.is_finite() || exponent <= 0.0 {
                return Err(HalftoneError::InvalidConfig(format!(
                    "curve exponent must be a positive number, got {}",
                    exponent
                )));
            }
            if !scale.is_finite() || scale < 0.0 {
                return Err(HalftoneError::InvalidConfig(format!(
                    "curve scale must be a non-negative number, got {}",
                    scale
                )));
            }
        }
        Ok(())
    }

    /// Apply the curve to a normalized brightness in [0, 1].
    ///
    /// The result is clamped to [0, 1].
    #[inline]
    pub fn adjust(&self, pattern: PatternKind, normalized: f32) -> f32 {
        let n = normalized.clamp(0.0, 1.0);
        let adjusted = match *self {
            ResponseCurve::Tuned => {
                let (exponent, scale) = pattern.tuning();
                n.powf(exponent) * scale
            }
            ResponseCurve::Linear => n,
            ResponseCurve::Power { exponent, scale } => n.powf(exponent) * scale,
        };
        adjusted.clamp(0.0, 1.0)
    }

    /// Mark factor for a brightness in [0, 255].
    #[inline]
    pub fn factor(&self, pattern: PatternKind, brightness: f32) -> f32 {
        1.0 - self.adjust(pattern, brightness / 255.0)
    }
}

impl fmt::Display for ResponseCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCurve::Tuned => f.write_str("tuned"),
            ResponseCurve::Linear => f.write_str("linear"),
            ResponseCurve::Power { exponent, scale } => write!(f, "power:{}:{}", exponent, scale),
        }
    }
}

impl FromStr for ResponseCurve {
    type Err = HalftoneError;

    /// Accepts `tuned`, `linear`, or `power:<exponent>:<scale>`.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        let curve = match lower.as_str() {
            "tuned" | "default" => ResponseCurve::Tuned,
            "linear" => ResponseCurve::Linear,
            other => {
                let mut parts = other.split(':');
                let (Some("power"), Some(exponent), Some(scale), None) =
                    (parts.next(), parts.next(), parts.next(), parts.next())
                else {
                    return Err(HalftoneError::InvalidConfig(format!(
                        "unknown curve '{}' (expected tuned, linear or power:<exponent>:<scale>)",
                        s
                    )));
                };
                let parse = |v: &str| {
                    v.parse::<f32>().map_err(|e| {
                        HalftoneError::InvalidConfig(format!("invalid curve value '{}': {}", v, e))
                    })
                };
                ResponseCurve::Power {
                    exponent: parse(exponent)?,
                    scale: parse(scale)?,
                }
            }
        };
        curve.validate()?;
        Ok(curve)
    }
}
