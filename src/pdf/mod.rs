//! PDF building module

pub mod build;
pub mod embed;

// Re-export commonly used items
pub use build::{build_pdf, BuildOptions, BuildOutcome};
pub use embed::{load_image, ImageXObject};
