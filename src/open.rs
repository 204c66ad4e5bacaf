//! Post-creation actions
//!
//! Hands a file or folder to the host OS to open with its default
//! handler. A failure here is reported to the user by the caller; it
//! never undoes or invalidates an already-created PDF.

use std::path::Path;

use crate::error::Result;

/// Open a file or folder with the system default application
pub fn open_path(path: &Path) -> Result<()> {
    log::debug!("Asking the OS to open {}", path.display());

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}
