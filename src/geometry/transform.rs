//! Coordinate rotation.

/// Rotate a point around the origin.
///
/// # Parameters
/// - `x`, `y`: Point coordinates
/// - `angle`: Rotation angle in radians (counter-clockwise in a y-up frame,
///   clockwise on screen where y points down)
#[inline]
pub fn rotate(x: f32, y: f32, angle: f32) -> (f32, f32) {
    if angle == 0.0 {
        return (x, y);
    }
    let (sin_a, cos_a) = angle.sin_cos();
    (x * cos_a - y * sin_a, x * sin_a + y * cos_a)
}

/// A rotation with its sine and cosine computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    sin: f32,
    cos: f32,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation { sin: 0.0, cos: 1.0 };

    pub fn new(angle: f32) -> Self {
        if angle == 0.0 {
            return Self::IDENTITY;
        }
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }

    /// The opposite rotation.
    #[inline]
    pub fn inverse(self) -> Self {
        Self {
            sin: -self.sin,
            cos: self.cos,
        }
    }

    #[inline]
    pub fn apply(self, x: f32, y: f32) -> (f32, f32) {
        (x * self.cos - y * self.sin, x * self.sin + y * self.cos)
    }
}

/// Map a canvas point into the local frame of a mark centered at (cx, cy)
/// and rotated by `angle`.
#[inline]
pub fn to_local(x: f32, y: f32, cx: f32, cy: f32, angle: f32) -> (f32, f32) {
    rotate(x - cx, y - cy, -angle)
}
