//! Error types for the images-to-pdf library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the images-to-pdf library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF assembly error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Source folder contained no eligible images
    #[error("There are no image files in the source folder")]
    NoImages,

    /// Image file has an extension outside the accepted set
    #[error("Unsupported image file: {}", .0.display())]
    UnsupportedImage(PathBuf),
}
