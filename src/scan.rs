//! Source folder scanning
//!
//! Lists the image files eligible for conversion: regular files directly
//! inside the source folder whose extension, case-insensitively, is one of
//! the accepted set. Subfolders are not entered.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File extensions accepted for conversion (matched case-insensitively)
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Check whether a path carries an accepted image extension
///
/// Only the extension is inspected; whether the path is a regular file is
/// the caller's concern.
pub fn is_eligible(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.iter().any(|accepted| *accepted == ext)
        }
        None => false,
    }
}

/// List the eligible image files in a folder
///
/// Returns the regular files in `dir` (no recursion) with an accepted
/// extension, sorted lexicographically by path so the resulting page order
/// is the same on every platform. The caller is expected to have already
/// validated that `dir` exists and is a directory; IO errors from the
/// listing itself are propagated.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    log::info!("Scanning {} for image files", dir.display());

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            log::trace!("Skipping non-file entry: {}", path.display());
            continue;
        }

        if is_eligible(&path) {
            log::debug!("Found image file: {}", path.display());
            images.push(path);
        } else {
            log::trace!("Skipping file with unsupported extension: {}", path.display());
        }
    }

    // Sort paths for consistent ordering
    images.sort();

    log::info!("Found {} image files", images.len());
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_eligible_accepted_extensions() {
        assert!(is_eligible(Path::new("photo.jpg")));
        assert!(is_eligible(Path::new("photo.png")));
        assert!(is_eligible(Path::new("photo.JPG")));
        assert!(is_eligible(Path::new("photo.Png")));
    }

    #[test]
    fn test_is_eligible_rejected_extensions() {
        assert!(!is_eligible(Path::new("photo.jpeg")));
        assert!(!is_eligible(Path::new("photo.gif")));
        assert!(!is_eligible(Path::new("document.pdf")));
        assert!(!is_eligible(Path::new("notes.txt")));
        assert!(!is_eligible(Path::new("no_extension")));
    }

    #[test]
    fn test_list_images_filters_by_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        fs::write(dir.path().join("b.PNG"), b"x").unwrap();
        fs::write(dir.path().join("c.gif"), b"x").unwrap();
        fs::write(dir.path().join("d.txt"), b"x").unwrap();

        let images = list_images(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.jpg", "b.PNG"]);
    }

    #[test]
    fn test_list_images_excludes_subdirectories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("top.jpg"), b"x").unwrap();

        // A subdirectory named like an image must not be listed, and files
        // inside subdirectories must not be reached at all.
        let sub = dir.path().join("nested.jpg");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.png"), b"x").unwrap();

        let images = list_images(dir.path()).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name().unwrap(), "top.jpg");
    }

    #[test]
    fn test_list_images_sorted_order() {
        let dir = tempdir().unwrap();
        // Create out of lexicographic order
        fs::write(dir.path().join("3.png"), b"x").unwrap();
        fs::write(dir.path().join("1.jpg"), b"x").unwrap();
        fs::write(dir.path().join("2.jpg"), b"x").unwrap();

        let images = list_images(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["1.jpg", "2.jpg", "3.png"]);
    }

    #[test]
    fn test_list_images_empty_folder() {
        let dir = tempdir().unwrap();
        let images = list_images(dir.path()).unwrap();
        assert!(images.is_empty());
    }
}
