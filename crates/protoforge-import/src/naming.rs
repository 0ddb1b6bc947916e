//! Naming conventions for bundle folders
//!
//! A bundle folder is named with underscore separated words, optionally
//! followed by an extension such as `.rsi` (`big_red_door.rsi`).

use std::path::Path;

/// Base name of a bundle folder: its file name without the extension
#[must_use]
pub fn bundle_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// `big_red_door` → `BigRedDoor`
///
/// Each segment gets an upper case first character and a lower case rest.
/// Empty segments from doubled or edge underscores are skipped.
#[must_use]
pub fn pascal_case(stem: &str) -> String {
    stem.split('_').filter(|s| !s.is_empty()).map(capitalize).collect()
}

/// `big_red_door` → `big red door`
#[must_use]
pub fn display_name(stem: &str) -> String {
    stem.replace('_', " ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
