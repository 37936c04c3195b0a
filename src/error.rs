//! # Error Types
//!
//! This module defines the error type used throughout the halftoner library.

use thiserror::Error;

/// Main error type for halftoner operations
#[derive(Debug, Error)]
pub enum HalftoneError {
    /// Rejected render parameters or a malformed raster, detected before any drawing
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Image decode/encode error reported by the codec
    #[error("Image error: {0}")]
    Image(String),

    /// Render stopped by a cancellation flag
    #[error("Render cancelled")]
    Cancelled,

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HalftoneError>;
