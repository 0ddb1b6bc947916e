//! Bundle folder importer
//!
//! Turns sprite bundle folders into starter prototypes. The generated
//! records are deliberately minimal and meant to be refined by hand:
//! the `sprite` reference on both components is left as a placeholder and is
//! not resolved to a repository-relative path.

use crate::error::{ImportError, ImportResult};
use crate::naming::{bundle_stem, display_name, pascal_case};
use protoforge_model::{Component, Prototype, DEFAULT_KIND};
use serde::Deserialize;
use std::path::Path;

/// Component kinds attached to every imported prototype, in order
pub const BUNDLE_COMPONENTS: [&str; 2] = ["Sprite", "Icon"];

/// Field on each bundle component holding the sprite reference
pub const SPRITE_FIELD: &str = "sprite";

/// Importer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Kind given to imported prototypes
    pub prototype_kind: String,
    /// Value stored in each component's `sprite` field
    pub sprite_placeholder: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            prototype_kind: DEFAULT_KIND.to_string(),
            sprite_placeholder: String::new(),
        }
    }
}

/// Derives prototypes from bundle folders
#[derive(Debug, Clone, Default)]
pub struct RsiImporter {
    settings: ImportSettings,
}

impl RsiImporter {
    /// Create importer with default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create importer with explicit settings
    #[inline]
    #[must_use]
    pub fn with_settings(settings: ImportSettings) -> Self {
        Self { settings }
    }

    /// Current settings
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Build one prototype from a bundle folder
    ///
    /// # Errors
    /// - `ImportError::DirectoryNotFound` if `path` does not exist
    /// - `ImportError::NotADirectory` if `path` is not a directory
    /// - `ImportError::InvalidBundleName` if no base name can be derived
    pub fn import_bundle(&self, path: impl AsRef<Path>) -> ImportResult<Prototype> {
        let path = path.as_ref();
        ensure_directory(path)?;

        let stem =
            bundle_stem(path).ok_or_else(|| ImportError::InvalidBundleName(path.to_path_buf()))?;
        let id = pascal_case(&stem);
        tracing::debug!(bundle = %path.display(), %id, "importing bundle");

        let components = BUNDLE_COMPONENTS.iter().map(|kind| {
            Component::new(*kind)
                .with_field(SPRITE_FIELD, self.settings.sprite_placeholder.as_str())
        });

        Ok(Prototype::new()
            .with_kind(self.settings.prototype_kind.as_str())
            .with_id(id)
            .with_name(display_name(&stem))
            .with_description("")
            .with_components(components))
    }

    /// Build one prototype per entry of `path`
    ///
    /// Entries come back in filesystem iteration order, which is platform
    /// dependent. The first entry that fails aborts the whole batch.
    ///
    /// # Errors
    /// Path errors for `path` itself as in [`RsiImporter::import_bundle`],
    /// `ImportError::Io` if listing fails, and the first entry's error.
    pub fn import_folder(&self, path: impl AsRef<Path>) -> ImportResult<Vec<Prototype>> {
        let path = path.as_ref();
        ensure_directory(path)?;

        let entries = std::fs::read_dir(path).map_err(|e| ImportError::io_error(path, e))?;
        let mut prototypes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ImportError::io_error(path, e))?;
            prototypes.push(self.import_bundle(entry.path())?);
        }

        tracing::info!(
            folder = %path.display(),
            count = prototypes.len(),
            "imported bundle folder"
        );
        Ok(prototypes)
    }
}

/// Build one prototype from a bundle folder with default settings
///
/// # Errors
/// Same as [`RsiImporter::import_bundle`].
pub fn from_rsi(path: impl AsRef<Path>) -> ImportResult<Prototype> {
    RsiImporter::new().import_bundle(path)
}

/// Build one prototype per entry of a folder with default settings
///
/// # Errors
/// Same as [`RsiImporter::import_folder`].
pub fn from_folder(path: impl AsRef<Path>) -> ImportResult<Vec<Prototype>> {
    RsiImporter::new().import_folder(path)
}

fn ensure_directory(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ImportError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoforge_model::FieldValue;
    use tempfile::TempDir;

    #[test]
    fn default_settings() {
        let settings = ImportSettings::default();
        assert_eq!(settings.prototype_kind, "entity");
        assert_eq!(settings.sprite_placeholder, "");
    }

    #[test]
    fn settings_from_toml() {
        let settings: ImportSettings =
            toml::from_str("sprite_placeholder = \"TODO.rsi\"").unwrap();
        assert_eq!(settings.prototype_kind, "entity");
        assert_eq!(settings.sprite_placeholder, "TODO.rsi");
    }

    #[test]
    fn custom_settings_flow_into_record() {
        let dir = TempDir::new().unwrap();
        let bundle = dir.path().join("crate_box.rsi");
        std::fs::create_dir(&bundle).unwrap();

        let importer = RsiImporter::with_settings(ImportSettings {
            prototype_kind: "structure".to_string(),
            sprite_placeholder: "Objects/crate_box.rsi".to_string(),
        });
        let prototype = importer.import_bundle(&bundle).unwrap();

        assert_eq!(prototype.kind(), "structure");
        for component in prototype.components() {
            assert_eq!(
                component.get(SPRITE_FIELD),
                Some(&FieldValue::from("Objects/crate_box.rsi"))
            );
        }
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("door.png");
        std::fs::write(&file, b"png").unwrap();

        assert!(matches!(from_rsi(&file), Err(ImportError::NotADirectory(_))));
        assert!(matches!(from_folder(&file), Err(ImportError::NotADirectory(_))));
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        assert!(matches!(from_rsi(&missing), Err(ImportError::DirectoryNotFound(_))));
        assert!(matches!(from_folder(&missing), Err(ImportError::DirectoryNotFound(_))));
    }
}
