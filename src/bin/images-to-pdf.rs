//! Images-to-PDF CLI tool
//!
//! A command-line tool for converting a folder of images into a single
//! PDF, remembering the chosen folders and options between runs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use images_to_pdf::command::{apply, Command, Effect};
use images_to_pdf::estimate::{folder_size_bytes, format_megabytes};
use images_to_pdf::open::open_path;
use images_to_pdf::pdf::{build_pdf, BuildOptions, BuildOutcome};
use images_to_pdf::scan::list_images;
use images_to_pdf::settings::Settings;

/// Images to PDF - bundle a folder of images into a single PDF
#[derive(Parser)]
#[command(name = "images-to-pdf")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Convert a folder of images, remembering both folders for next time
    images-to-pdf build ~/photos ~/documents

    # Reuse the remembered folders and open the PDF when done
    images-to-pdf build --open-pdf

    # See which files would be converted, and the input size
    images-to-pdf list ~/photos

    # Change the remembered output filename
    images-to-pdf config set --filename Holiday")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the images in a folder into a single PDF
    Build {
        /// Source folder containing the images (defaults to the remembered one)
        source: Option<PathBuf>,

        /// Destination folder for the PDF (defaults to the remembered one)
        destination: Option<PathBuf>,

        /// Output filename without extension (defaults to the remembered one)
        #[arg(long)]
        filename: Option<String>,

        /// Overwrite an existing PDF without asking
        #[arg(long)]
        overwrite: bool,

        /// Open the destination folder after creation (remembered)
        #[arg(long)]
        open_folder: bool,

        /// Open the created PDF after creation (remembered)
        #[arg(long)]
        open_pdf: bool,
    },

    /// List the eligible images in a folder with a size estimate
    List {
        /// Folder to scan (defaults to the remembered source)
        source: Option<PathBuf>,
    },

    /// Show or change the remembered settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the remembered settings
    Show,

    /// Change one or more remembered settings
    Set(SetArgs),
}

#[derive(Args)]
struct SetArgs {
    /// Source folder containing the images
    #[arg(long)]
    source: Option<PathBuf>,

    /// Destination folder for the PDF
    #[arg(long)]
    destination: Option<PathBuf>,

    /// Output filename without extension (empty restores the default)
    #[arg(long)]
    filename: Option<String>,

    /// Open the destination folder after each build
    #[arg(long)]
    open_folder: Option<bool>,

    /// Open the created PDF after each build
    #[arg(long)]
    open_pdf: Option<bool>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            source,
            destination,
            filename,
            overwrite,
            open_folder,
            open_pdf,
        } => cmd_build(source, destination, filename, overwrite, open_folder, open_pdf),
        Commands::List { source } => cmd_list(source),
        Commands::Config { action } => cmd_config(action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Location of the settings file: beside the process working directory
fn settings_file() -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir().context("Cannot determine the working directory")?;
    Ok(Settings::file_in(&cwd))
}

/// Fold a list of commands into the settings record
///
/// Returns whether any of them requested persistence.
fn reduce(settings: &mut Settings, commands: Vec<Command>) -> bool {
    let mut dirty = false;
    for command in commands {
        let (next, effect) = apply(settings, command);
        *settings = next;
        dirty |= effect == Effect::Persist;
    }
    dirty
}

/// Ask on the terminal whether an existing file may be overwritten
fn confirm_overwrite(path: &Path) -> bool {
    eprintln!("A pdf file with the same name already exists:");
    eprintln!("  {}", path.display());
    eprint!("Do you want to overwrite it? [y/N] ");
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Convert the images in the source folder into a single PDF
fn cmd_build(
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
    filename: Option<String>,
    overwrite: bool,
    open_folder: bool,
    open_pdf: bool,
) -> anyhow::Result<()> {
    let settings_path = settings_file()?;
    let mut settings = Settings::load(&settings_path)?;

    // Command-line selections replace the remembered ones, field by field.
    let mut commands = Vec::new();
    if let Some(path) = source {
        commands.push(Command::SelectSource(path.to_string_lossy().into_owned()));
    }
    if let Some(path) = destination {
        commands.push(Command::SelectDestination(path.to_string_lossy().into_owned()));
    }
    if let Some(name) = filename {
        commands.push(Command::Rename(name));
    }
    if open_folder {
        commands.push(Command::SetOpenFolder(true));
    }
    if open_pdf {
        commands.push(Command::SetOpenPdf(true));
    }
    let dirty = reduce(&mut settings, commands);

    if settings.source.is_empty() || settings.destination.is_empty() {
        bail!("Please select a source and destination folder");
    }

    let source_dir = PathBuf::from(&settings.source);
    let destination_dir = PathBuf::from(&settings.destination);
    for dir in [&source_dir, &destination_dir] {
        if !dir.is_dir() {
            bail!("Not a directory: {}", dir.display());
        }
    }

    // Remember the selections before converting, so a failed conversion
    // can be retried without re-entering them.
    if dirty {
        settings.save(&settings_path)?;
    }

    let images = list_images(&source_dir)?;
    eprintln!("Converting {} image files...", images.len());

    let options = BuildOptions {
        image_paths: images,
        destination: destination_dir.clone(),
        filename: settings.filename.clone(),
    };

    let outcome = if overwrite {
        build_pdf(&options, |_| true)?
    } else {
        build_pdf(&options, confirm_overwrite)?
    };

    let target = match outcome {
        BuildOutcome::Declined => {
            eprintln!("Keeping the existing file.");
            return Ok(());
        }
        BuildOutcome::Created(path) => path,
    };

    match target.file_name().and_then(|name| name.to_str()) {
        Some(name) => println!("{} created in {}", name, destination_dir.display()),
        None => println!("Created {}", target.display()),
    }

    if settings.open_folder {
        if let Err(e) = open_path(&destination_dir) {
            eprintln!(
                "Warning: could not open folder {}: {}",
                destination_dir.display(),
                e
            );
        }
    }
    if settings.open_pdf {
        if let Err(e) = open_path(&target) {
            eprintln!("Warning: could not open {}: {}", target.display(), e);
        }
    }

    Ok(())
}

/// List the eligible images in a folder with the input size estimate
fn cmd_list(source: Option<PathBuf>) -> anyhow::Result<()> {
    let settings_path = settings_file()?;
    let settings = Settings::load(&settings_path)?;

    let dir = match source {
        Some(path) => path,
        None if !settings.source.is_empty() => PathBuf::from(&settings.source),
        None => bail!("Please select a source folder"),
    };
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    let images = list_images(&dir)?;
    for path in &images {
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            println!("{}", name);
        }
    }

    let bytes = folder_size_bytes(&dir)?;
    println!(
        "{} image files, about {} MB",
        images.len(),
        format_megabytes(bytes)
    );

    Ok(())
}

/// Show or change the remembered settings
fn cmd_config(action: ConfigAction) -> anyhow::Result<()> {
    let settings_path = settings_file()?;
    let mut settings = Settings::load(&settings_path)?;

    match action {
        ConfigAction::Show => {
            println!("source: {}", settings.source);
            println!("destination: {}", settings.destination);
            println!("filename: {}", settings.filename);
            println!("open folder after creation: {}", settings.open_folder);
            println!("open pdf after creation: {}", settings.open_pdf);
        }
        ConfigAction::Set(args) => {
            let mut commands = Vec::new();
            if let Some(path) = args.source {
                commands.push(Command::SelectSource(path.to_string_lossy().into_owned()));
            }
            if let Some(path) = args.destination {
                commands.push(Command::SelectDestination(
                    path.to_string_lossy().into_owned(),
                ));
            }
            if let Some(name) = args.filename {
                commands.push(Command::Rename(name));
            }
            if let Some(flag) = args.open_folder {
                commands.push(Command::SetOpenFolder(flag));
            }
            if let Some(flag) = args.open_pdf {
                commands.push(Command::SetOpenPdf(flag));
            }

            if commands.is_empty() {
                bail!("Nothing to change; pass at least one option");
            }

            if reduce(&mut settings, commands) {
                settings.save(&settings_path)?;
            }
        }
    }

    Ok(())
}
