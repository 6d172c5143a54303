use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::PlannedRename;
use crate::error::{ConvertError, Result};
use crate::fs::read_text;
use crate::links::fix_links;
use crate::MD_EXTENSION;

/// Renames every Markdown file under `root` after its first-line heading,
/// drops that heading line from the body, and rewrites links tree-wide
/// after each rename.
///
/// The whole tree is planned before the first mutation; a planned name
/// that collides with another planned name or with an existing file fails
/// the run instead of overwriting silently.
pub fn rename_markdown_files(root: &Path) -> Result<()> {
    let plan = plan_file_renames(root)?;
    check_collisions(&plan)?;

    for rename in &plan {
        apply_file_rename(rename)?;
        fix_links(root, &rename.old_name, &rename.new_name)?;
    }

    Ok(())
}

/// Strips the trailing hash token from every directory name under `root`
/// and rewrites links tree-wide after each rename.
///
/// Directories are planned in one walk and applied deepest first, so an
/// ancestor's rename can never invalidate a path still waiting in the plan.
pub fn rename_folders(root: &Path) -> Result<()> {
    let plan = plan_folder_renames(root)?;
    check_collisions(&plan)?;

    for rename in &plan {
        if rename.new_path.exists() {
            return Err(ConvertError::NameCollision {
                source_path: rename.old_path.clone(),
                target: rename.new_path.clone(),
            });
        }
        fs::rename(&rename.old_path, &rename.new_path)?;
        fix_links(root, &rename.old_name, &rename.new_name)?;
    }

    Ok(())
}

/// Turns a first line into the file's display name.
/// `"# My Note"` -> `"My Note"`; a marker-less or empty line passes
/// through trimmed, which can legitimately leave an empty name.
fn derive_heading(first_line: &str) -> String {
    first_line
        .strip_prefix("# ")
        .unwrap_or(first_line)
        .trim()
        .replace('/', "-")
}

/// Drops the trailing whitespace-delimited hash token Notion appends to
/// folder names. A single-token name degenerates to an empty string; the
/// collision check turns that into a reported error downstream.
fn strip_hash_suffix(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.split_last() {
        Some((_, rest)) => rest.join(" "),
        None => String::new(),
    }
}

fn plan_file_renames(root: &Path) -> Result<Vec<PlannedRename>> {
    let mut plan = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(MD_EXTENSION) {
            continue;
        }

        let content = read_text(path)?;
        let first_line = content.split('\n').next().unwrap_or("");
        let new_name = format!("{}.{}", derive_heading(first_line), MD_EXTENSION);
        let parent = path.parent().unwrap_or(root);

        plan.push(PlannedRename {
            old_path: path.to_path_buf(),
            new_path: parent.join(&new_name),
            old_name: entry.file_name().to_string_lossy().into_owned(),
            new_name,
        });
    }

    Ok(plan)
}

fn plan_folder_renames(root: &Path) -> Result<Vec<PlannedRename>> {
    let mut plan = Vec::new();

    // contents_first yields children before their parents
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let old_name = entry.file_name().to_string_lossy().into_owned();
        let new_name = strip_hash_suffix(&old_name);
        let parent = entry.path().parent().unwrap_or(root);

        plan.push(PlannedRename {
            old_path: entry.path().to_path_buf(),
            new_path: parent.join(&new_name),
            old_name,
            new_name,
        });
    }

    Ok(plan)
}

/// Fails if two planned renames target the same path, or a target is
/// already taken on disk by something that is not the renamed entity
/// itself.
fn check_collisions(plan: &[PlannedRename]) -> Result<()> {
    let mut taken: HashSet<&PathBuf> = HashSet::new();

    for rename in plan {
        if !taken.insert(&rename.new_path)
            || (rename.new_path != rename.old_path && rename.new_path.exists())
        {
            return Err(ConvertError::NameCollision {
                source_path: rename.old_path.clone(),
                target: rename.new_path.clone(),
            });
        }
    }

    Ok(())
}

fn apply_file_rename(rename: &PlannedRename) -> Result<()> {
    // Re-read here: link fixes for earlier renames may have rewritten it
    let content = read_text(&rename.old_path)?;
    let body = match content.split_once('\n') {
        Some((_heading, body)) => body,
        None => "",
    };

    fs::write(&rename.new_path, body)?;
    if rename.new_path != rename.old_path {
        fs::remove_file(&rename.old_path)?;
    }

    Ok(())
}
