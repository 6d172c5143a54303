use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::fs::read_text;
use crate::MD_EXTENSION;

/// Percent-encodes a file or folder name the way export links spell it.
///
/// Every link comparison and replacement goes through this one helper so
/// encoding-sensitive names (parentheses, '%', non-ASCII) cannot drift
/// between the match side and the replace side.
pub fn encoded(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// Rewrites every occurrence of `old_name` (in its percent-encoded form)
/// to `new_name` across all Markdown files under `root`.
///
/// Links to a renamed entity may appear anywhere in the tree, so the scan
/// is deliberately unscoped. Files are written back even when nothing
/// matched; a second pass with the same arguments is a no-op.
pub fn fix_links(root: &Path, old_name: &str, new_name: &str) -> Result<()> {
    let old_encoded = encoded(old_name);
    let new_encoded = encoded(new_name);

    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(MD_EXTENSION) {
            continue;
        }

        let content = read_text(path)?;
        fs::write(path, content.replace(&old_encoded, &new_encoded))?;
    }

    Ok(())
}
