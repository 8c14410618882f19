/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Djot output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Djot;

impl OutputFormat for Djot {
    fn text(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            // Every ASCII punctuation character may be backslash-escaped in
            // Djot; only the ones that open inline markup need it.
            if matches!(
                c,
                '\\' | '`' | '*' | '_' | '{' | '}' | '[' | ']' | '^' | '~' | '$' | '<' | '!'
            ) {
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
        format!("_{}_", content)
    }

    fn strong(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("*{}*", content)
    }

    fn link(&self, url: &str, content: String) -> String {
        format!("[{}]({})", content, url)
    }

    fn anchor(&self, key: &str) -> String {
        format!("[]{{#{}}}", key)
    }

    fn list_item(&self, content: String) -> String {
        format!("- {}", content)
    }

    fn heading(&self, level: u8, text: &str) -> String {
        format!("{} {}", "#".repeat(level.max(1) as usize), text)
    }

    fn attachment(&self, href: &str, key: &str, icon: &str) -> String {
        format!(
            r#" [![PDF]({})]({}){{title="PDF document for {}"}}"#,
            icon, href, key
        )
    }
}
