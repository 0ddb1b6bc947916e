//! Error types for bundle import

use std::path::PathBuf;

/// Errors while deriving prototypes from bundle folders
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Path does not exist
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Path has no usable base name (e.g. `..` or a filesystem root)
    #[error("cannot derive a bundle name from {0}")]
    InvalidBundleName(PathBuf),

    /// IO error while listing a directory
    #[error("io error reading {path}: {source}")]
    Io {
        /// Directory being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;
