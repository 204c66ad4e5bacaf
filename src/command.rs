//! User commands over the settings record
//!
//! The interactive surface reduces to a small set of named commands, each
//! a pure function from (current settings, command) to (new settings,
//! requested side effect). The driver owns all IO; this module never
//! touches the filesystem.

use crate::settings::{Settings, DEFAULT_FILENAME};

/// A user action on the settings record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose the source folder
    SelectSource(String),
    /// Choose the destination folder
    SelectDestination(String),
    /// Change the output filename (without extension)
    Rename(String),
    /// Toggle opening the destination folder after creation
    SetOpenFolder(bool),
    /// Toggle opening the PDF after creation
    SetOpenPdf(bool),
    /// Run the conversion pipeline
    Build,
    /// Leave the program
    Exit,
}

/// Side effect requested by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the settings record back to disk
    Persist,
    /// Run the conversion pipeline
    Build,
    /// Stop the driver loop
    Quit,
}

/// Apply a command to the settings record
///
/// Field edits return the updated record with a `Persist` request;
/// `Build` and `Exit` leave the record untouched. Renaming to an empty
/// string restores the default filename, since an empty name would make
/// the output target unusable.
pub fn apply(settings: &Settings, command: Command) -> (Settings, Effect) {
    let mut next = settings.clone();

    match command {
        Command::SelectSource(path) => {
            next.source = path;
            (next, Effect::Persist)
        }
        Command::SelectDestination(path) => {
            next.destination = path;
            (next, Effect::Persist)
        }
        Command::Rename(name) => {
            next.filename = if name.trim().is_empty() {
                DEFAULT_FILENAME.to_string()
            } else {
                name
            };
            (next, Effect::Persist)
        }
        Command::SetOpenFolder(flag) => {
            next.open_folder = flag;
            (next, Effect::Persist)
        }
        Command::SetOpenPdf(flag) => {
            next.open_pdf = flag;
            (next, Effect::Persist)
        }
        Command::Build => (next, Effect::Build),
        Command::Exit => (next, Effect::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_source_updates_and_persists() {
        let settings = Settings::default();
        let (next, effect) = apply(&settings, Command::SelectSource("/photos".into()));
        assert_eq!(next.source, "/photos");
        assert_eq!(effect, Effect::Persist);
        // Other fields untouched
        assert_eq!(next.filename, settings.filename);
    }

    #[test]
    fn test_select_destination_updates_and_persists() {
        let settings = Settings::default();
        let (next, effect) = apply(&settings, Command::SelectDestination("/out".into()));
        assert_eq!(next.destination, "/out");
        assert_eq!(effect, Effect::Persist);
    }

    #[test]
    fn test_rename() {
        let settings = Settings::default();
        let (next, effect) = apply(&settings, Command::Rename("Album".into()));
        assert_eq!(next.filename, "Album");
        assert_eq!(effect, Effect::Persist);
    }

    #[test]
    fn test_rename_empty_restores_default() {
        let mut settings = Settings::default();
        settings.filename = "Album".to_string();

        let (next, _) = apply(&settings, Command::Rename("".into()));
        assert_eq!(next.filename, "ImageToPDF");

        let (next, _) = apply(&settings, Command::Rename("   ".into()));
        assert_eq!(next.filename, "ImageToPDF");
    }

    #[test]
    fn test_toggle_flags() {
        let settings = Settings::default();

        let (next, effect) = apply(&settings, Command::SetOpenFolder(true));
        assert!(next.open_folder);
        assert_eq!(effect, Effect::Persist);

        let (next, effect) = apply(&next, Command::SetOpenPdf(true));
        assert!(next.open_pdf);
        assert_eq!(effect, Effect::Persist);
    }

    #[test]
    fn test_build_and_exit_leave_settings_unchanged() {
        let mut settings = Settings::default();
        settings.source = "/photos".to_string();

        let (next, effect) = apply(&settings, Command::Build);
        assert_eq!(next, settings);
        assert_eq!(effect, Effect::Build);

        let (next, effect) = apply(&settings, Command::Exit);
        assert_eq!(next, settings);
        assert_eq!(effect, Effect::Quit);
    }
}
