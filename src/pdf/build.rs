//! PDF assembly from an ordered image list
//!
//! Builds a document with one page per image, sized to the image (one
//! pixel = one point), and writes it to the destination folder. An
//! existing target file is never overwritten without the caller's
//! confirmation, and the output is written to a temporary file first so a
//! failed conversion cannot leave a truncated target behind.

use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::pdf::embed::load_image;

/// Options for building a PDF from images
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Image file paths in the order their pages should appear
    pub image_paths: Vec<PathBuf>,
    /// Folder the output PDF is written into
    pub destination: PathBuf,
    /// Output filename without the `.pdf` extension
    pub filename: String,
}

impl BuildOptions {
    /// The full path of the output file
    pub fn target_path(&self) -> PathBuf {
        self.destination.join(format!("{}.pdf", self.filename))
    }
}

/// How a build attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The PDF was written to this path
    Created(PathBuf),
    /// The target existed and the overwrite confirmation was declined
    Declined,
}

/// Build a PDF from an ordered list of image files
///
/// `confirm_overwrite` is consulted only when the target file already
/// exists; answering `false` aborts without touching it, which is a
/// normal outcome rather than an error.
///
/// # Example
///
/// ```no_run
/// use images_to_pdf::pdf::{build_pdf, BuildOptions};
/// use std::path::PathBuf;
///
/// let options = BuildOptions {
///     image_paths: vec![
///         PathBuf::from("1. cover.jpg"),
///         PathBuf::from("2. back.png"),
///     ],
///     destination: PathBuf::from("/documents"),
///     filename: "Album".to_string(),
/// };
///
/// build_pdf(&options, |_| true).expect("Failed to build PDF");
/// ```
pub fn build_pdf(
    options: &BuildOptions,
    mut confirm_overwrite: impl FnMut(&Path) -> bool,
) -> Result<BuildOutcome> {
    if options.image_paths.is_empty() {
        return Err(Error::NoImages);
    }

    // Validate all input files exist
    for path in &options.image_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }
    if !options.destination.is_dir() {
        return Err(Error::NotADirectory(options.destination.clone()));
    }

    let target = options.target_path();
    if target.exists() && !confirm_overwrite(&target) {
        log::info!("Overwrite of {} declined", target.display());
        return Ok(BuildOutcome::Declined);
    }

    log::info!(
        "Converting {} images into {}",
        options.image_paths.len(),
        target.display()
    );

    let mut doc = Document::with_version("1.5");

    // Reserve the Pages id up front so each page can reference its parent
    // as it is created.
    let pages_id = doc.new_object_id();

    let mut page_ids: Vec<ObjectId> = Vec::new();
    for path in &options.image_paths {
        let image = load_image(path)?;
        log::debug!(
            "Embedding {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );

        let image_id = doc.add_object(image.stream);

        // Scale the unit image square to the page, then draw it.
        let content = format!("q\n{} 0 0 {} 0 0 cm\n/Im0 Do\nQ", image.width, image.height);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut xobjects = Dictionary::new();
        xobjects.set("Im0", Object::Reference(image_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(image.width as i64),
                Object::Integer(image.height as i64),
            ]),
        );
        page.set("Resources", Object::Dictionary(resources));
        page.set("Contents", Object::Reference(content_id));

        page_ids.push(doc.add_object(Object::Dictionary(page)));
    }

    // Create Kids array with all page references
    let kids: Vec<Object> = page_ids
        .iter()
        .map(|&id| Object::Reference(id))
        .collect();

    // Create Pages object
    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_object));

    // Create Catalog
    let catalog_id = doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    doc.objects.insert(catalog_id, Object::Dictionary(catalog));

    // Set the catalog as the root
    doc.trailer.set("Root", Object::Reference(catalog_id));

    // Compress, then write to a temporary file in the destination folder
    // and rename onto the target, so a mid-write failure cannot truncate
    // an existing file.
    doc.compress();

    let mut temp = NamedTempFile::new_in(&options.destination)?;
    doc.save_to(&mut temp)?;
    temp.persist(&target).map_err(|e| Error::Io(e.error))?;

    log::info!("Created {}", target.display());
    Ok(BuildOutcome::Created(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_image_list_is_no_images() {
        let dir = tempdir().unwrap();
        let options = BuildOptions {
            image_paths: vec![],
            destination: dir.path().to_path_buf(),
            filename: "Empty".to_string(),
        };

        let err = build_pdf(&options, |_| true).unwrap_err();
        assert!(matches!(err, Error::NoImages));
        assert!(!dir.path().join("Empty.pdf").exists());
    }

    #[test]
    fn test_missing_input_file_is_reported() {
        let dir = tempdir().unwrap();
        let options = BuildOptions {
            image_paths: vec![dir.path().join("gone.jpg")],
            destination: dir.path().to_path_buf(),
            filename: "Out".to_string(),
        };

        let err = build_pdf(&options, |_| true).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_missing_destination_is_reported() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("only.png");
        image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]))
            .save(&image_path)
            .unwrap();

        let options = BuildOptions {
            image_paths: vec![image_path],
            destination: dir.path().join("nowhere"),
            filename: "Out".to_string(),
        };

        let err = build_pdf(&options, |_| true).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_target_path_appends_pdf_extension() {
        let options = BuildOptions {
            image_paths: vec![],
            destination: PathBuf::from("/out"),
            filename: "Album".to_string(),
        };
        assert_eq!(options.target_path(), PathBuf::from("/out/Album.pdf"));
    }

    #[test]
    fn test_confirmation_not_consulted_without_conflict() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("only.png");
        image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]))
            .save(&image_path)
            .unwrap();

        let options = BuildOptions {
            image_paths: vec![image_path],
            destination: dir.path().to_path_buf(),
            filename: "Fresh".to_string(),
        };

        let outcome = build_pdf(&options, |_| {
            panic!("confirmation requested with no existing target")
        })
        .unwrap();

        assert_eq!(
            outcome,
            BuildOutcome::Created(dir.path().join("Fresh.pdf"))
        );
    }

    // End-to-end coverage, including the overwrite gate, lives in
    // tests/pipeline.rs.
}
