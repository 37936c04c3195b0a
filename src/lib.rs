//! # Halftoner - Image-to-Halftone Renderer
//!
//! Halftoner turns a raster image into a halftone: the image is divided into
//! square cells, each cell is sampled for brightness, and the cell is replaced
//! by a single black mark (dot, square, triangle, line or cross) whose size
//! follows the cell's darkness. It provides:
//!
//! - **Sampling**: row-major cell grid with point or area brightness
//! - **Response curves**: per-pattern tuned brightness-to-size mapping
//! - **Shapes**: anti-aliased signed-distance marks on a white canvas
//! - **Parallel rendering**: rayon bands with output identical to the sequential path
//! - **Codec and server**: file decode/encode plus an HTTP upload/download surface
//!
//! ## Quick Start
//!
//! ```no_run
//! use halftoner::{PatternKind, RenderConfig, codec, render};
//!
//! let image = codec::open("photo.jpg")?;
//! let config = RenderConfig::new(10, PatternKind::Dot);
//!
//! let halftone = render(&image, &config)?;
//! codec::save(&halftone, "photo-halftone.png")?;
//!
//! # Ok::<(), halftoner::HalftoneError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`raster`] | Pixel buffer the engine reads and writes |
//! | [`sampler`] | Cell grid traversal and brightness sampling |
//! | [`response`] | Brightness-to-factor curves |
//! | [`pattern`] | Mark shapes and their tuning |
//! | [`geometry`] | Signed distances, rotation, anti-aliasing |
//! | [`render`] | Ink canvas and render entry points |
//! | [`codec`] | Image file decode/encode |
//! | [`server`] | HTTP interface |
//! | [`error`] | Error types |

pub mod codec;
pub mod error;
pub mod geometry;
pub mod pattern;
pub mod raster;
pub mod render;
pub mod response;
pub mod sampler;
pub mod server;

// Re-exports for convenience
pub use error::HalftoneError;
pub use pattern::PatternKind;
pub use raster::Raster;
pub use render::{RenderConfig, render, render_parallel};
