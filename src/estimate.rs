//! Folder size estimation
//!
//! Sums the on-disk size of the eligible image files in a folder and
//! formats it for display. The result is an estimate of the input volume,
//! not a predictor of the output PDF size.

use std::path::Path;

use crate::error::Result;
use crate::scan::is_eligible;

/// Total byte size of the eligible image files in a folder
///
/// Applies the same filter as the scanner (regular files with an accepted
/// extension, no recursion).
pub fn folder_size_bytes(dir: &Path) -> Result<u64> {
    let mut total = 0u64;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() && is_eligible(&entry.path()) {
            total += entry.metadata()?.len();
        }
    }
    log::debug!("Eligible files in {} total {} bytes", dir.display(), total);
    Ok(total)
}

/// Format a byte count as megabytes for display
///
/// Megabytes = bytes / 1024². Precision depends on magnitude: below 10 MB
/// two decimal places, below 100 MB one, above that a whole number. The
/// bucket is chosen on the rounded value, so 9.999 MB displays as "10.0"
/// rather than "10.00".
pub fn format_megabytes(bytes: u64) -> String {
    let mb = bytes as f64 / (1024.0 * 1024.0);

    let two_places = (mb * 100.0).round() / 100.0;
    if two_places < 10.0 {
        return format!("{:.2}", two_places);
    }

    let one_place = (mb * 10.0).round() / 10.0;
    if one_place < 100.0 {
        return format!("{:.1}", one_place);
    }

    format!("{:.0}", mb.round())
}
