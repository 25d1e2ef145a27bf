//! Archive naming conventions
//!
//! Category tokens come from a language model, so they are sanitised into a
//! single safe directory name before touching the filesystem.

use docarchive_domain::{Category, ClassificationRecord};
use std::path::Path;

/// Directory name used when a category sanitises to nothing
const FALLBACK_CATEGORY_DIR: &str = "other";

/// File name used when the source path has none
const FALLBACK_FILE_NAME: &str = "document";

/// Directory (relative to the archive root) for a category
///
/// Lowercased; anything outside `[a-z0-9_-]` becomes `_`.
pub fn category_path_for(category: &Category) -> String {
    let sanitized = sanitize(category.as_str());
    if sanitized.chars().all(|c| c == '_') {
        FALLBACK_CATEGORY_DIR.to_string()
    } else {
        sanitized
    }
}

/// File name for an archived document
///
/// `<date>_<category>_<original file name>` when the metadata carries an ISO
/// `date` (`YYYY-MM-DD...`), otherwise `<category>_<original file name>`.
pub fn document_name_for(source_path: &Path, record: &ClassificationRecord) -> String {
    let category = category_path_for(&record.category);
    let file_name = source_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

    match record.metadata_str("date").and_then(iso_date_prefix) {
        Some(date) => format!("{}_{}_{}", date, category, file_name),
        None => format!("{}_{}", category, file_name),
    }
}

fn sanitize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `YYYY-MM-DD` prefix of `value`, if it starts with one
fn iso_date_prefix(value: &str) -> Option<&str> {
    let candidate = value.trim().get(..10)?;
    let bytes = candidate.as_bytes();
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    let month: u32 = candidate[5..7].parse().ok()?;
    let day: u32 = candidate[8..10].parse().ok()?;
    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some(candidate)
    } else {
        None
    }
}
