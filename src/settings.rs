//! Persisted user settings
//!
//! The settings live in a small sidecar file next to the working
//! directory, in the flat sectioned key-value format the original tool
//! used: a single `[settings]` section with string values and `"1"`/`""`
//! encoded booleans. The file format is fixed; this module maps it onto a
//! typed record with an explicit load/save pair.
//!
//! On first access the file does not exist yet; `load` writes the default
//! record to disk before returning it, so every later read sees a fully
//! populated store.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the sidecar settings file
pub const SETTINGS_FILE: &str = "ImageToPDF.ini";

/// Default output filename (without extension)
pub const DEFAULT_FILENAME: &str = "ImageToPDF";

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Source folder containing the images
    pub source: String,
    /// Destination folder for the output PDF
    pub destination: String,
    /// Output filename without the `.pdf` extension
    pub filename: String,
    /// Open the destination folder after the PDF is created
    pub open_folder: bool,
    /// Open the PDF itself after it is created
    pub open_pdf: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: String::new(),
            destination: String::new(),
            filename: DEFAULT_FILENAME.to_string(),
            open_folder: false,
            open_pdf: false,
        }
    }
}

impl Settings {
    /// Location of the settings file inside a directory
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE)
    }

    /// Load settings from a file, creating it with defaults on first run
    ///
    /// A missing file is not an error: the default record is written to
    /// disk and returned. Unknown keys and sections in an existing file
    /// are ignored; keys missing from it fill in from the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings file at {}, writing defaults", path.display());
            let settings = Self::default();
            settings.save(path)?;
            return Ok(settings);
        }

        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Write the full record back to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        log::debug!("Saving settings to {}", path.display());
        std::fs::write(path, self.to_ini())?;
        Ok(())
    }

    /// Render the record in the on-disk format
    fn to_ini(&self) -> String {
        let mut out = String::from("[settings]\n");
        out.push_str(&format!("source = {}\n", self.source));
        out.push_str(&format!("destination = {}\n", self.destination));
        out.push_str(&format!("filename = {}\n", self.filename));
        out.push_str(&format!("chk_open_folder = {}\n", encode_flag(self.open_folder)));
        out.push_str(&format!("chk_open_pdf = {}\n", encode_flag(self.open_pdf)));
        out
    }

    /// Parse the on-disk format, filling missing keys from the defaults
    fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        let mut in_settings = false;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                in_settings = line[1..line.len() - 1].trim() == "settings";
                continue;
            }
            if !in_settings {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim();
                match key.trim() {
                    "source" => settings.source = value.to_string(),
                    "destination" => settings.destination = value.to_string(),
                    "filename" => settings.filename = value.to_string(),
                    "chk_open_folder" => settings.open_folder = value == "1",
                    "chk_open_pdf" => settings.open_pdf = value == "1",
                    _ => {}
                }
            }
        }

        settings
    }
}

/// Boolean encoding used by the store: "1" for set, empty for unset
fn encode_flag(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        ""
    }
}
