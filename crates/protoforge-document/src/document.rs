//! Document location checks and record loading

use crate::error::{DocumentError, DocumentResult};
use serde_yaml::Value;
use std::path::Path;

/// Recognized document extensions, without the dot
pub const DOCUMENT_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Check that `path` is an existing file with a document extension
///
/// # Errors
/// - `DocumentError::NotFound` if the path is not an existing file
/// - `DocumentError::UnsupportedFormat` if the extension is not `yml`/`yaml`
pub fn ensure_document_path(path: &Path) -> DocumentResult<()> {
    if !path.is_file() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if !DOCUMENT_EXTENSIONS.contains(&extension) {
        return Err(DocumentError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    Ok(())
}

/// Load the record list of an existing document
///
/// An empty body, or one holding only comments, is an empty list.
///
/// # Errors
/// Path errors from [`ensure_document_path`], `Io` on read failure, `Parse`
/// on invalid YAML and `NotARecordList` when the top level is not a list.
pub fn load_records(path: impl AsRef<Path>) -> DocumentResult<Vec<Value>> {
    let path = path.as_ref();
    ensure_document_path(path)?;

    let text = std::fs::read_to_string(path).map_err(|e| DocumentError::io_error(path, e))?;
    parse_records(path, &text)
}

/// Parse document text into its record list
///
/// # Errors
/// `Parse` on invalid YAML and `NotARecordList` when the top level is not a
/// list. `path` is only used for error reporting.
pub fn parse_records(path: &Path, text: &str) -> DocumentResult<Vec<Value>> {
    if is_blank(text) {
        return Ok(Vec::new());
    }

    let value: Value = serde_yaml::from_str(text).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(records) => Ok(records),
        other => Err(DocumentError::NotARecordList {
            path: path.to_path_buf(),
            found: value_kind(&other),
        }),
    }
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
