//! Image file to PDF XObject conversion
//!
//! Each accepted image becomes an image XObject stream ready to be placed
//! on its own page. JPEG data is embedded as-is under a DCTDecode filter,
//! so the original compression survives the conversion. PNG files are
//! decoded to raw 8-bit RGB samples (alpha is discarded) and left to the
//! document-wide Flate compression pass.

use std::path::Path;

use image::GenericImageView;
use lopdf::{Dictionary, Object, Stream};

use crate::error::{Error, Result};

/// An image prepared for embedding, plus its pixel dimensions
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// The XObject stream to add to the document
    pub stream: Stream,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Load an image file and prepare it for embedding
///
/// Dispatches on the (case-insensitive) file extension. Corrupt or
/// undecodable data surfaces as an `Error::Image`.
pub fn load_image(path: &Path) -> Result<ImageXObject> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| Error::UnsupportedImage(path.to_path_buf()))?;

    match ext.as_str() {
        "jpg" => load_jpeg(path),
        "png" => load_png(path),
        _ => Err(Error::UnsupportedImage(path.to_path_buf())),
    }
}

/// Shared XObject dictionary skeleton
fn image_dict(width: u32, height: u32, color_space: &[u8]) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict
}

/// Embed a JPEG file without recompressing it
///
/// The file bytes go into the stream untouched; the decode here only
/// establishes dimensions and whether the data is grayscale.
fn load_jpeg(path: &Path) -> Result<ImageXObject> {
    let data = std::fs::read(path)?;
    let img = image::load_from_memory_with_format(&data, image::ImageFormat::Jpeg)?;
    let (width, height) = img.dimensions();

    let color_space: &[u8] = match img.color() {
        image::ColorType::L8 | image::ColorType::L16 => b"DeviceGray",
        _ => b"DeviceRGB",
    };

    let mut dict = image_dict(width, height, color_space);
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    let mut stream = Stream::new(dict, data);
    // The stream already holds DCT data; recompressing it would corrupt it.
    stream.allows_compression = false;

    Ok(ImageXObject { stream, width, height })
}

/// Embed a PNG file as raw RGB samples
///
/// Alpha channels are dropped; the document compression pass Flate-encodes
/// the samples when the document is saved.
fn load_png(path: &Path) -> Result<ImageXObject> {
    let img = image::open(path)?;
    let (width, height) = img.dimensions();
    let samples = img.to_rgb8().into_raw();

    let dict = image_dict(width, height, b"DeviceRGB");
    let stream = Stream::new(dict, samples);

    Ok(ImageXObject { stream, width, height })
}
