//! Distance functions for shape fields.
//!
//! Signed distances are negative inside a shape, zero on its boundary and
//! positive outside, measured in pixels.

/// Euclidean distance between two points.
#[inline]
pub fn dist(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    (x - cx).hypot(y - cy)
}

/// Unsigned distance from `(px, py)` to the segment `(x1, y1)..(x2, y2)`.
pub fn dist_to_segment(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let (ex, ey) = (x2 - x1, y2 - y1);
    let length_sq = ex * ex + ey * ey;
    if length_sq < 1e-10 {
        return dist(px, py, x1, y1);
    }

    // Nearest point parameter along the edge, held to the endpoints
    let t = (((px - x1) * ex + (py - y1) * ey) / length_sq).clamp(0.0, 1.0);
    dist(px, py, x1 + t * ex, y1 + t * ey)
}

/// Signed distance to a circle of `radius` centered at the origin.
#[inline]
pub fn sd_circle(x: f32, y: f32, radius: f32) -> f32 {
    (x * x + y * y).sqrt() - radius
}

/// Signed distance to an axis-aligned box centered at the origin.
///
/// `half_w` and `half_h` are half the box extents.
#[inline]
pub fn sd_box(x: f32, y: f32, half_w: f32, half_h: f32) -> f32 {
    let qx = x.abs() - half_w;
    let qy = y.abs() - half_h;
    let outside = (qx.max(0.0) * qx.max(0.0) + qy.max(0.0) * qy.max(0.0)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside
}

/// Signed distance to a convex polygon.
///
/// Vertices may wind either way. Inside the polygon the result is minus the
/// distance to the nearest edge.
pub fn sd_convex_polygon(x: f32, y: f32, vertices: &[(f32, f32)]) -> f32 {
    if vertices.is_empty() {
        return f32::INFINITY;
    }

    let mut nearest = f32::INFINITY;
    let mut positive = false;
    let mut negative = false;

    for (i, &(ax, ay)) in vertices.iter().enumerate() {
        let (bx, by) = vertices[(i + 1) % vertices.len()];
        nearest = nearest.min(dist_to_segment(x, y, ax, ay, bx, by));

        let cross = (bx - ax) * (y - ay) - (by - ay) * (x - ax);
        if cross > 0.0 {
            positive = true;
        } else if cross < 0.0 {
            negative = true;
        }
    }

    if positive && negative { nearest } else { -nearest }
}
