use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{}: file is not valid UTF-8 text", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("rename collision: `{}` would overwrite `{}`", source_path.display(), target.display())]
    NameCollision { source_path: PathBuf, target: PathBuf },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
