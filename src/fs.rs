use std::fs::{self, File};
use std::path::Path;

use log::info;
use zip::ZipArchive;

use crate::error::{ConvertError, Result};

pub fn prepare_extraction_dir(dir: &Path) -> Result<()> {
    // Remove any previous extraction and recreate
    if dir.exists() {
        info!("Removing existing extraction directory: {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

pub fn extract_archive(zip_path: &Path, dir: &Path) -> Result<()> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();

        // Reject entries that would land outside the extraction dir
        let Some(relative) = entry.enclosed_name() else {
            return Err(ConvertError::Io(std::io::Error::other(format!(
                "archive entry `{name}` escapes the extraction directory"
            ))));
        };
        let outpath = dir.join(relative);

        if name.ends_with('/') {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }
    }

    Ok(())
}

/// Reads a Markdown file as text, refusing anything that is not UTF-8.
/// A lossy read here could leave a dangling link behind forever.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ConvertError::NotUtf8 {
        path: path.to_path_buf(),
    })
}
