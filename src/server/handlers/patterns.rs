//! Pattern API handlers.

use axum::Json;
use serde::Serialize;

use crate::pattern::PatternKind;

/// Pattern information returned by the API.
#[derive(Debug, Serialize)]
pub struct PatternInfo {
    pub name: &'static str,
    /// Exponent of the tuned response curve
    pub exponent: f32,
    /// Scale of the tuned response curve
    pub scale: f32,
}

impl From<PatternKind> for PatternInfo {
    fn from(kind: PatternKind) -> Self {
        let (exponent, scale) = kind.tuning();
        Self {
            name: kind.name(),
            exponent,
            scale,
        }
    }
}

/// GET /api/patterns - List every pattern with its curve parameters.
pub async fn list() -> Json<Vec<PatternInfo>> {
    Json(PatternKind::ALL.into_iter().map(PatternInfo::from).collect())
}
