//! Anti-aliased edges.

/// Linear falloff across a shape boundary.
///
/// Returns 1.0 while `dist` is below `inner`, ramps down to 0.0 over the next
/// `width` units, and stays at 0.0 beyond that.
#[inline]
pub fn aa_edge(dist: f32, inner: f32, width: f32) -> f32 {
    if dist < inner {
        1.0
    } else if dist < inner + width {
        1.0 - (dist - inner) / width
    } else {
        0.0
    }
}

/// Pixel coverage for a signed distance sampled at the pixel center.
///
/// A one pixel ramp centered on the boundary: fully covered at -0.5, empty at +0.5.
#[inline]
pub fn coverage(signed_dist: f32) -> f32 {
    aa_edge(signed_dist, -0.5, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aa_edge_ramp() {
        assert_eq!(aa_edge(-1.0, 0.0, 2.0), 1.0);
        assert!((aa_edge(1.0, 0.0, 2.0) - 0.5).abs() < 1e-6);
        assert!((aa_edge(1.5, 0.0, 2.0) - 0.25).abs() < 1e-6);
        assert_eq!(aa_edge(2.0, 0.0, 2.0), 0.0);
    }

    #[test]
    fn test_coverage_ramp() {
        assert_eq!(coverage(-0.5), 1.0);
        assert_eq!(coverage(-3.0), 1.0);
        assert!((coverage(0.0) - 0.5).abs() < 1e-6);
        assert_eq!(coverage(0.5), 0.0);
        assert_eq!(coverage(10.0), 0.0);
    }
}
