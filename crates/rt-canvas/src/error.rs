//! Error types for canvas construction and output.

use thiserror::Error;

/// Result type alias using [`CanvasError`] as the error type.
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Errors from canvas construction and file output.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Pixel buffer length does not match the requested dimensions.
    #[error("pixel buffer of {got} entries does not fill {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Actual buffer length
        got: usize,
    },

    /// I/O error while writing an image file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
