//! I/O error types
//!
//! A single error type for reading outline images and writing region
//! masks, wrapping codec errors as well as standard I/O and container
//! errors so callers handle one taxonomy.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image uses a format or layout this pipeline does not accept
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The PNG decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the container types (e.g. zero-area image)
    #[error("core error: {0}")]
    Core(#[from] paintmask_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
