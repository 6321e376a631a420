//! Rendering error types.

use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The off-screen window must have a non-zero size within the supported maximum.
    #[error("invalid off-screen window size {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    /// Scalar bar arguments were rejected.
    #[error("invalid scalar bar arguments: {0}")]
    InvalidScalarBar(String),

    /// The plotting context was already closed.
    #[error("plotter has already been closed")]
    ContextClosed,

    /// The output file extension does not name a supported raster format.
    #[error("unsupported image format: {0:?}")]
    UnsupportedFormat(String),

    /// The pixel buffer does not match the framebuffer size.
    #[error("invalid image data")]
    InvalidImageData,

    /// Image encoding failed.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the output file failed.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
