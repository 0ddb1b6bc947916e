//! Record separation pass
//!
//! Cosmetic only: puts one blank line before every top-level record so
//! that a long document reads as distinct blocks.

/// Line prefix that starts a top-level prototype record
pub const RECORD_START: &str = "- type:";

/// Insert a blank line before each record start
///
/// The first line never gets one, and a record start already preceded by a
/// blank line is left alone, so applying this twice equals applying it once.
#[must_use]
pub fn separate_records(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut previous_blank = true;

    for line in text.split_inclusive('\n') {
        if !previous_blank && line.starts_with(RECORD_START) {
            out.push('\n');
        }
        previous_blank = line.trim().is_empty();
        out.push_str(line);
    }

    out
}
