//! Images to PDF Library
//!
//! A cross-platform library for bundling a folder of images into a single
//! PDF. This library provides functionality to:
//! - Scan a folder for eligible image files (jpg/png)
//! - Estimate the total input size for display
//! - Build a one-page-per-image PDF, with an overwrite-confirmation gate
//! - Remember the user's folders, filename and flags across runs
//! - Open the result (or its folder) with the OS default handler
//!
//! # Example
//!
//! ```no_run
//! use images_to_pdf::pdf::{build_pdf, BuildOptions};
//! use images_to_pdf::scan::list_images;
//! use std::path::{Path, PathBuf};
//!
//! let images = list_images(Path::new("/photos")).expect("Failed to scan folder");
//!
//! let options = BuildOptions {
//!     image_paths: images,
//!     destination: PathBuf::from("/documents"),
//!     filename: "ImageToPDF".to_string(),
//! };
//!
//! build_pdf(&options, |_| true).expect("Failed to build PDF");
//! ```

pub mod command;
pub mod error;
pub mod estimate;
pub mod open;
pub mod pdf;
pub mod scan;
pub mod settings;

// Re-export commonly used items
pub use error::{Error, Result};
