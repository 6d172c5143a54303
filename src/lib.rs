use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::error::Result;
use crate::fs::{extract_archive, prepare_extraction_dir};
use crate::rename::{rename_folders, rename_markdown_files};

pub mod domain;
pub mod error;
pub mod fs;
pub mod links;
pub mod rename;

/// Extension of the note files the converter renames and rewrites.
pub const MD_EXTENSION: &str = "md";

/// Fixed directory the archive is extracted into and converted in place.
pub const EXTRACT_DIR: &str = "markdown_import";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the Notion export zip archive
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Runs the whole conversion: extract the export archive into
/// `extract_dir`, rename every Markdown file after its heading, strip the
/// hash suffix from every folder, and keep all intra-archive links valid
/// across the renames.
pub fn convert_export(archive_path: &Path, extract_dir: &Path) -> Result<()> {
    prepare_extraction_dir(extract_dir)?;

    info!("Extracting {}...", archive_path.display());
    extract_archive(archive_path, extract_dir)?;
    info!("Extraction done.");

    info!("Renaming markdown files and fixing links...");
    rename_markdown_files(extract_dir)?;
    info!("Renaming markdown files and fixing links done.");

    info!("Renaming folders...");
    rename_folders(extract_dir)?;
    info!("Renaming folders done.");

    info!(
        "All done. Import the folder '{}' with your note app's markdown directory importer.",
        extract_dir.display()
    );
    Ok(())
}
