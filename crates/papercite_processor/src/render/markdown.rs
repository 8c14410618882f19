/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Markdown output format.
//!
//! Anchors and attachment icons are emitted as inline HTML, which every
//! common Markdown renderer passes through.

use super::format::OutputFormat;

/// Characters escaped in running text. The period and hyphen are left alone:
/// escaping them only clutters initials and page ranges.
const SPECIAL_CHARS: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '!',
];

#[derive(Default, Clone)]
pub struct Markdown;

impl OutputFormat for Markdown {
    fn text(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            if SPECIAL_CHARS.contains(&c) {
                out.push('\\');
            }
            out.push(c);
        }
        out
    }

    fn emph(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("*{}*", content)
    }

    fn strong(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("**{}**", content)
    }

    fn link(&self, url: &str, content: String) -> String {
        format!("[{}]({})", content, url)
    }

    fn anchor(&self, key: &str) -> String {
        format!(r#"<a id="{}"></a>"#, key)
    }

    fn list_item(&self, content: String) -> String {
        format!("- {}", content)
    }

    fn heading(&self, level: u8, text: &str) -> String {
        format!("{} {}", "#".repeat(level.max(1) as usize), text)
    }

    fn attachment(&self, href: &str, key: &str, icon: &str) -> String {
        format!(
            r#" <a href="{}" title="PDF document for {}"><img src="{}" style="height: 1em;" /></a>"#,
            href, key, icon
        )
    }
}
