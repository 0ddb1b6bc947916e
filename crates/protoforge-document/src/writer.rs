//! Document merge service
//!
//! Appends prototype records to an existing YAML document.
//!
//! # Formatting loss
//!
//! The existing document is parsed into plain values and emitted again, so
//! **comments, anchors, quoting style and any manual layout in the original
//! file are discarded**. Only the records themselves survive a merge.
//!
//! # Write model
//!
//! The combined list is rendered and separated in memory, written to a
//! temporary file next to the target and renamed over it. A failure leaves
//! the original document untouched.

use crate::document::{ensure_document_path, load_records};
use crate::error::{DocumentError, DocumentResult};
use crate::format::separate_records;
use protoforge_model::Prototype;
use serde::Deserialize;
use serde_yaml::Value;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Output settings for rewritten documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Insert a blank line before each top-level record
    pub separate_records: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            separate_records: true,
        }
    }
}

/// Counts reported by a completed append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendReport {
    /// Records already in the document
    pub existing: usize,
    /// Records appended by this call
    pub appended: usize,
}

impl AppendReport {
    /// Records in the document after the append
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.existing + self.appended
    }
}

/// Appends records to YAML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentWriter {
    settings: DocumentSettings,
}

impl DocumentWriter {
    /// Create writer with default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create writer with explicit settings
    #[inline]
    #[must_use]
    pub fn with_settings(settings: DocumentSettings) -> Self {
        Self { settings }
    }

    /// Current settings
    #[inline]
    #[must_use]
    pub fn settings(&self) -> DocumentSettings {
        self.settings
    }

    /// Append prototypes to the end of an existing document
    ///
    /// Existing records keep their position and content; new records follow
    /// in the order given, each as produced by [`Prototype::serialize`].
    /// Comments and formatting of the original file are lost (see module
    /// docs). Appending nothing rewrites the same record list.
    ///
    /// # Errors
    /// - `DocumentError::NotFound` if `path` is not an existing file
    /// - `DocumentError::UnsupportedFormat` if the extension is not `yml`/`yaml`
    /// - `DocumentError::Parse` / `NotARecordList` if the existing body is unusable
    /// - `DocumentError::Io` / `Emit` / `Persist` if the rewrite fails
    pub fn append(
        &self,
        path: impl AsRef<Path>,
        prototypes: &[Prototype],
    ) -> DocumentResult<AppendReport> {
        let path = path.as_ref();
        let mut records = load_records(path)?;
        let existing = records.len();

        for prototype in prototypes {
            tracing::debug!(
                id = prototype.id().unwrap_or_default(),
                kind = prototype.kind(),
                "appending prototype"
            );
            records.push(prototype.to_yaml_value());
        }

        let text = self.render(&records)?;
        write_replacing(path, &text)?;

        let report = AppendReport {
            existing,
            appended: prototypes.len(),
        };
        tracing::info!(
            path = %path.display(),
            existing = report.existing,
            appended = report.appended,
            "document updated"
        );
        Ok(report)
    }

    /// Append a single prototype
    ///
    /// # Errors
    /// Same as [`DocumentWriter::append`].
    pub fn append_one(
        &self,
        path: impl AsRef<Path>,
        prototype: &Prototype,
    ) -> DocumentResult<AppendReport> {
        self.append(path, std::slice::from_ref(prototype))
    }

    /// Render a record list as document text
    ///
    /// # Errors
    /// `DocumentError::Emit` if the values cannot be emitted as YAML.
    pub fn render(&self, records: &[Value]) -> DocumentResult<String> {
        let text = serde_yaml::to_string(records).map_err(DocumentError::Emit)?;
        if self.settings.separate_records {
            Ok(separate_records(&text))
        } else {
            Ok(text)
        }
    }

    /// Apply only the record separation pass to a document, in place
    ///
    /// The file's text is otherwise untouched, comments included.
    ///
    /// # Errors
    /// Path errors as for [`DocumentWriter::append`], `Io`/`Persist` on I/O
    /// failure.
    pub fn format_file(&self, path: impl AsRef<Path>) -> DocumentResult<bool> {
        let path = path.as_ref();
        ensure_document_path(path)?;

        let text = std::fs::read_to_string(path).map_err(|e| DocumentError::io_error(path, e))?;
        let formatted = separate_records(&text);
        if formatted == text {
            tracing::debug!(path = %path.display(), "document already formatted");
            return Ok(false);
        }

        write_replacing(path, &formatted)?;
        Ok(true)
    }
}

/// Append prototypes to a document with default settings
///
/// Destroys comments and formatting of the original file; see
/// [`DocumentWriter::append`].
///
/// # Errors
/// Same as [`DocumentWriter::append`].
pub fn append_to_file(
    path: impl AsRef<Path>,
    prototypes: &[Prototype],
) -> DocumentResult<AppendReport> {
    DocumentWriter::new().append(path, prototypes)
}

/// Render records with default settings
///
/// # Errors
/// Same as [`DocumentWriter::render`].
pub fn render_records(records: &[Value]) -> DocumentResult<String> {
    DocumentWriter::new().render(records)
}

/// Replace `path` with `contents` through a sibling temporary file
///
/// Symlinks are resolved first so the link survives and its target is the
/// file that gets replaced.
fn write_replacing(path: &Path, contents: &str) -> DocumentResult<()> {
    let resolved = std::fs::canonicalize(path).map_err(|e| DocumentError::io_error(path, e))?;
    let path = resolved.as_path();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| DocumentError::io_error(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| DocumentError::io_error(path, e))?;

    // Keep the original file's permissions rather than the temp file's
    let permissions = std::fs::metadata(path)
        .map_err(|e| DocumentError::io_error(path, e))?
        .permissions();
    std::fs::set_permissions(tmp.path(), permissions)
        .map_err(|e| DocumentError::io_error(path, e))?;

    tmp.persist(path).map_err(|e| DocumentError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use protoforge_model::Component;

    fn door(id: &str) -> Prototype {
        Prototype::new()
            .with_id(id)
            .with_name("door")
            .with_description("")
            .with_component(Component::new("Sprite").with_field("sprite", ""))
    }

    #[test]
    fn render_separates_records() {
        let records = vec![door("A").to_yaml_value(), door("B").to_yaml_value()];
        let text = DocumentWriter::new().render(&records).unwrap();

        assert!(text.starts_with("- type: entity\n"));
        assert!(text.contains("\n\n- type: entity\n  id: B\n"));
        assert_eq!(text.matches("\n\n").count(), 1);
    }

    #[test]
    fn render_without_separation() {
        let writer = DocumentWriter::with_settings(DocumentSettings {
            separate_records: false,
        });
        let records = vec![door("A").to_yaml_value(), door("B").to_yaml_value()];
        let text = writer.render(&records).unwrap();
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn render_keeps_serialize_key_order() {
        let prototype = Prototype::new()
            .with_extra("zz", 1)
            .with_id("Z")
            .with_parent("A");
        let text = render_records(&[prototype.to_yaml_value()]).unwrap();
        assert_eq!(
            text,
            "- type: entity\n  parent: A\n  id: Z\n  name: null\n  description: null\n  components: []\n  zz: 1\n"
        );
    }

    #[test]
    fn report_total() {
        let report = AppendReport {
            existing: 3,
            appended: 2,
        };
        assert_eq!(report.total(), 5);
    }

    #[test]
    fn settings_default_from_toml() {
        let settings: DocumentSettings = toml::from_str("").unwrap();
        assert!(settings.separate_records);

        let settings: DocumentSettings = toml::from_str("separate_records = false").unwrap();
        assert!(!settings.separate_records);
    }
}
