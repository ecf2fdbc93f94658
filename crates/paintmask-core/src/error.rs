//! Error types for paintmask-core
//!
//! Provides a unified error type for container construction and pixel
//! access. Each variant captures enough context for diagnostics without
//! exposing buffer internals.

use thiserror::Error;

/// Paintmask container error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length does not match the stated dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Coordinates outside the canvas
    #[error("coordinates out of bounds: ({x}, {y}) on {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for container operations
pub type Result<T> = std::result::Result<T, Error>;
