use std::path::PathBuf;

/// One rename captured during the planning walk, before any mutation.
///
/// Both renamers snapshot the whole tree into a list of these and only
/// then start touching the filesystem, so a parent directory rename can
/// never invalidate a path the walk has not reached yet.
#[derive(Debug, Clone)]
pub struct PlannedRename {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_name: String,
    pub new_name: String,
}
