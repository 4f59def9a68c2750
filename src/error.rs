use std::path::PathBuf;
use thiserror::Error;

/// Main error type for phpinit
///
/// Only unrecoverable conditions live here; anything the run can survive
/// (backup rename, broken manifests) is reported through the `Reporter`
/// instead of being propagated.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot determine project root: {0}")]
    ProjectRoot(PathBuf),

    #[error("README.template.md not found in {0}")]
    TemplateMissing(PathBuf),

    #[error("Could not read {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    ReadmeWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for phpinit operations
pub type Result<T> = std::result::Result<T, SetupError>;
