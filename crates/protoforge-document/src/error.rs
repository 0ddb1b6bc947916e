//! Error types for document operations

use std::path::PathBuf;

/// Errors while loading, merging or rewriting a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Target document does not exist as a file
    #[error("document not found: {0}")]
    NotFound(PathBuf),

    /// Target path has an unrecognized extension
    #[error("unsupported document format for {path}: expected .yml or .yaml, got '{extension}'")]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
        /// Extension found (empty when there is none)
        extension: String,
    },

    /// IO error reading or writing the document
    #[error("io error on {path}: {source}")]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Existing document is not valid YAML
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },

    /// Existing document's top level is not a list of records
    #[error("{path} does not hold a record list (found {found})")]
    NotARecordList {
        /// Document path
        path: PathBuf,
        /// Kind of top-level value found
        found: &'static str,
    },

    /// Combined record list could not be emitted
    #[error("failed to emit document: {0}")]
    Emit(#[source] serde_yaml::Error),

    /// Rewritten document could not replace the original
    #[error("failed to replace {path}: {source}")]
    Persist {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
