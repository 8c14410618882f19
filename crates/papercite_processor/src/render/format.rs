/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable markup dialects.

/// Trait for defining how rendered citations are expressed in a specific
/// markup dialect.
///
/// Implementations translate formatting instructions (emphasis, links,
/// anchors, list items) into the target markup.
pub trait OutputFormat: Default + Clone {
    /// Convert a raw string into the format, escaping characters that would
    /// otherwise be read as markup.
    fn text(&self, s: &str) -> String;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<String>, delimiter: &str) -> String {
        items.join(delimiter)
    }

    /// Render content with emphasis (typically italics).
    fn emph(&self, content: String) -> String;

    /// Render content with strong emphasis (typically bold).
    fn strong(&self, content: String) -> String;

    /// Hyperlink the content to a URL.
    fn link(&self, url: &str, content: String) -> String;

    /// An empty anchor other parts of the document can link to by `key`.
    fn anchor(&self, key: &str) -> String;

    /// One item of a bullet list.
    fn list_item(&self, content: String) -> String;

    /// A section heading at `level` (1 is the top level).
    fn heading(&self, level: u8, text: &str) -> String;

    /// The inline annotation linking an entry to its local attachment.
    ///
    /// The result includes its own leading separator.
    fn attachment(&self, href: &str, key: &str, icon: &str) -> String;
}
