/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Local attachment lookup for the `file` field.
//!
//! The field holds `;`-separated descriptors of the form
//! `name:path[:content-type]`, as written by JabRef and Zotero exports.
//! Only relative paths are considered, and only when the file is actually
//! present next to the bibliography.

use std::path::Path;

use crate::reference::Entry;

/// Suffix an attachment path must end with to be linked by default.
pub const DEFAULT_SUFFIX: &str = "pdf";

/// Resolve the linkable PDF attachment of `entry`, if any.
pub fn resolve(entry: &Entry, base_dir: &Path) -> Option<String> {
    resolve_with_suffix(entry, base_dir, DEFAULT_SUFFIX)
}

/// Resolve the last eligible attachment of `entry` whose path ends with
/// `suffix` (case-insensitive) and exists relative to `base_dir`.
pub fn resolve_with_suffix(entry: &Entry, base_dir: &Path, suffix: &str) -> Option<String> {
    let files = entry.field("file")?;
    let suffix = suffix.to_lowercase();

    let mut linked = None;
    for descriptor in files.split(';') {
        let mut parts = descriptor.split(':');
        let (Some(_name), Some(file)) = (parts.next(), parts.next()) else {
            continue;
        };
        let file = file.trim();
        if file.is_empty() || Path::new(file).is_absolute() {
            continue;
        }
        if !file.to_lowercase().ends_with(&suffix) {
            continue;
        }
        if base_dir.join(file).exists() {
            linked = Some(file.to_string());
        } else {
            tracing::debug!(key = %entry.key, file, "attachment not found on disk");
        }
    }
    linked
}
