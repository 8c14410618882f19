/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of one bibliography entry into one list line.

use std::path::Path;

use super::format::OutputFormat;
use super::style::CitationStyle;
use crate::attachment;
use crate::reference::Entry;

/// Combines a style's formatted text with the attachment link and the
/// per-key anchor.
///
/// The anchor is exactly the entry key, so links such as `#kuhn1962` from
/// elsewhere in the document stay valid across re-renders.
pub struct EntryRenderer<'a, F: OutputFormat, S: CitationStyle> {
    fmt: F,
    style: &'a S,
    icon: &'a str,
    suffix: &'a str,
}

impl<'a, F: OutputFormat, S: CitationStyle> EntryRenderer<'a, F, S> {
    pub fn new(style: &'a S, icon: &'a str, suffix: &'a str) -> Self {
        Self {
            fmt: F::default(),
            style,
            icon,
            suffix,
        }
    }

    pub fn format(&self) -> &F {
        &self.fmt
    }

    pub fn render(&self, entry: &Entry, base_dir: &Path) -> String {
        let mut text = self.style.format_entry(&self.fmt, entry);
        if let Some(href) = attachment::resolve_with_suffix(entry, base_dir, self.suffix) {
            text.push_str(&self.fmt.attachment(&href, &entry.key, self.icon));
        }

        let anchor = self.fmt.anchor(&entry.key);
        if anchor.is_empty() {
            self.fmt.list_item(text)
        } else {
            self.fmt.list_item(format!("{} {}", anchor, text))
        }
    }
}
