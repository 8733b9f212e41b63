//! Error types for icon rendering and generation

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum IconError {
    /// Requested canvas dimension is not a positive pixel count
    #[error("invalid icon size {0}: must be a positive pixel count")]
    InvalidSize(u32),

    /// Shape geometry lies outside the canvas
    #[error("shape coordinate ({x}, {y}) is outside the {size}x{size} canvas")]
    OutOfBounds { x: i64, y: i64, size: u32 },

    /// The pixel buffer could not be serialized to PNG
    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] image::ImageError),

    /// The destination path could not be written
    #[error("failed to write icon file: {0}")]
    Io(#[from] std::io::Error),
}
