//! # Geometry Primitives
//!
//! Small f32 building blocks the shape drawers are assembled from. Every shape
//! is described as a signed distance field in its own local frame (origin at the
//! mark center, y pointing down), and pixels are shaded by converting that
//! distance into a coverage value.
//!
//! ## Categories
//!
//! - [`transform`]: Rotation into and out of a mark's local frame
//! - [`distance`]: Euclidean, segment, box and convex polygon distances
//! - [`edge`]: Anti-aliased coverage from signed distance
//!
//! ## Example
//!
//! ```rust
//! use halftoner::geometry::*;
//!
//! // Pixel center (3.5, 2.5) against a 4x4 box centered at (2, 2)
//! let (lx, ly) = rotate(3.5 - 2.0, 2.5 - 2.0, 0.0);
//! let alpha = coverage(sd_box(lx, ly, 2.0, 2.0));
//! assert_eq!(alpha, 1.0);
//! ```

pub mod distance;
pub mod edge;
pub mod transform;

pub use distance::*;
pub use edge::*;
pub use transform::*;
