/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn text(&self, s: &str) -> String {
        s.to_string()
    }

    fn emph(&self, content: String) -> String {
        content
    }

    fn strong(&self, content: String) -> String {
        content
    }

    fn link(&self, _url: &str, content: String) -> String {
        // Plain text just renders the text content of the link
        content
    }

    fn anchor(&self, _key: &str) -> String {
        String::new()
    }

    fn list_item(&self, content: String) -> String {
        format!("- {}", content)
    }

    fn heading(&self, _level: u8, text: &str) -> String {
        text.to_string()
    }

    fn attachment(&self, href: &str, _key: &str, _icon: &str) -> String {
        format!(" [PDF: {}]", href)
    }
}
