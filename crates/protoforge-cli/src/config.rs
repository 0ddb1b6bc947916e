//! Configuration loader
//!
//! Reads `protoforge.toml` from the working directory, or the file named by
//! `--config`. A missing default file means defaults; a named file must
//! exist and parse.
//!
//! ```toml
//! [import]
//! prototype_kind = "entity"
//! sprite_placeholder = ""
//!
//! [document]
//! separate_records = true
//! ```

use protoforge_document::DocumentSettings;
use protoforge_import::ImportSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up when `--config` is not given
pub(crate) const DEFAULT_CONFIG_FILE: &str = "protoforge.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ProtoforgeConfig {
    /// Bundle import settings
    pub(crate) import: ImportSettings,
    /// Document output settings
    pub(crate) document: DocumentSettings,
}

/// Errors loading configuration
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ProtoforgeConfig`]
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load configuration, from `explicit` if given, else the default file
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ProtoforgeConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                read_config(path)
            } else {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(ProtoforgeConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<ProtoforgeConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
