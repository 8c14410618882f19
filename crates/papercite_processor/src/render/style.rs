/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation styles: turning one entry into prose.
//!
//! The processor only needs "entry in, formatted text out"; [`CitationStyle`]
//! is that seam. [`PlainStyle`] follows the classic BibTeX `plain` layout:
//! a sequence of sentence blocks, each closed with a period.

use super::format::OutputFormat;
use crate::reference::{Entry, Name};

/// Formats a single entry in a target markup dialect.
pub trait CitationStyle {
    fn format_entry<F: OutputFormat>(&self, fmt: &F, entry: &Entry) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyle;

impl CitationStyle for PlainStyle {
    fn format_entry<F: OutputFormat>(&self, fmt: &F, entry: &Entry) -> String {
        let mut blocks = match entry.entry_type.as_str() {
            "article" => article(fmt, entry),
            "book" | "mvbook" | "collection" | "mvcollection" | "proceedings" => book(fmt, entry),
            "inproceedings" | "incollection" | "inbook" | "conference" => {
                in_collection(fmt, entry)
            }
            "phdthesis" | "mastersthesis" | "thesis" => thesis(fmt, entry),
            "techreport" | "report" => report(fmt, entry),
            _ => misc(fmt, entry),
        };
        blocks.push(text(fmt, entry, "note"));
        sentences(blocks)
    }
}

fn article<F: OutputFormat>(fmt: &F, entry: &Entry) -> Vec<Option<String>> {
    let journal = entry
        .field("journal")
        .or_else(|| entry.field("journaltitle"))
        .map(|j| fmt.emph(fmt.text(j)));
    let volume = volume_number_pages(fmt, entry);
    vec![
        names(fmt, &entry.author),
        text(fmt, entry, "title"),
        list([journal, volume, date(fmt, entry)]),
    ]
}

fn book<F: OutputFormat>(fmt: &F, entry: &Entry) -> Vec<Option<String>> {
    let title = entry.field("title").map(|t| fmt.emph(fmt.text(t)));
    let edition = entry
        .field("edition")
        .map(|e| format!("{} edition", fmt.text(e)));
    vec![
        names(fmt, &entry.author).or_else(|| editors(fmt, &entry.editor)),
        title,
        list([
            text(fmt, entry, "publisher"),
            address(fmt, entry),
            edition,
            date(fmt, entry),
        ]),
    ]
}

fn in_collection<F: OutputFormat>(fmt: &F, entry: &Entry) -> Vec<Option<String>> {
    let container = entry.field("booktitle").map(|b| fmt.emph(fmt.text(b)));
    let pages = entry
        .field("pages")
        .map(|p| format!("pages {}", fmt.text(&dash_range(p))));
    let source = list([editors(fmt, &entry.editor), container, pages]).map(|s| format!("In {}", s));
    vec![
        names(fmt, &entry.author),
        text(fmt, entry, "title"),
        source,
        list([
            text(fmt, entry, "publisher"),
            address(fmt, entry),
            date(fmt, entry),
        ]),
    ]
}

fn thesis<F: OutputFormat>(fmt: &F, entry: &Entry) -> Vec<Option<String>> {
    let kind = entry.field("type").map(|t| fmt.text(t)).or_else(|| {
        match entry.entry_type.as_str() {
            "phdthesis" => Some("PhD thesis".to_string()),
            "mastersthesis" => Some("Master's thesis".to_string()),
            _ => None,
        }
    });
    let school = entry
        .field("school")
        .or_else(|| entry.field("institution"))
        .map(|s| fmt.text(s));
    vec![
        names(fmt, &entry.author),
        text(fmt, entry, "title"),
        list([kind, school, address(fmt, entry), date(fmt, entry)]),
    ]
}

fn report<F: OutputFormat>(fmt: &F, entry: &Entry) -> Vec<Option<String>> {
    let kind = entry
        .field("type")
        .map(|t| fmt.text(t))
        .unwrap_or_else(|| "Technical Report".to_string());
    let number = match entry.field("number") {
        Some(n) => format!("{} {}", kind, fmt.text(n)),
        None => kind,
    };
    vec![
        names(fmt, &entry.author),
        text(fmt, entry, "title"),
        list([
            Some(number),
            text(fmt, entry, "institution"),
            address(fmt, entry),
            date(fmt, entry),
        ]),
    ]
}

fn misc<F: OutputFormat>(fmt: &F, entry: &Entry) -> Vec<Option<String>> {
    let url = entry.field("url").map(|u| fmt.link(u, fmt.text(u)));
    vec![
        names(fmt, &entry.author).or_else(|| editors(fmt, &entry.editor)),
        text(fmt, entry, "title"),
        list([
            text(fmt, entry, "howpublished"),
            text(fmt, entry, "publisher"),
            date(fmt, entry),
        ]),
        url,
    ]
}

fn text<F: OutputFormat>(fmt: &F, entry: &Entry, field: &str) -> Option<String> {
    entry.field(field).map(|v| fmt.text(v))
}

fn address<F: OutputFormat>(fmt: &F, entry: &Entry) -> Option<String> {
    text(fmt, entry, "address").or_else(|| text(fmt, entry, "location"))
}

/// "May 2020", or just the year.
fn date<F: OutputFormat>(fmt: &F, entry: &Entry) -> Option<String> {
    let year = entry.year()?;
    Some(match entry.field("month") {
        Some(month) => format!("{} {}", fmt.text(month), fmt.text(year)),
        None => fmt.text(year),
    })
}

/// `12(3):45–67`, with whichever parts are present.
fn volume_number_pages<F: OutputFormat>(fmt: &F, entry: &Entry) -> Option<String> {
    let mut out = String::new();
    if let Some(volume) = entry.field("volume") {
        out.push_str(&fmt.text(volume));
    }
    if let Some(number) = entry.field("number").or_else(|| entry.field("issue")) {
        out.push_str(&format!("({})", fmt.text(number)));
    }
    if let Some(pages) = entry.field("pages") {
        let pages = fmt.text(&dash_range(pages));
        if out.is_empty() {
            out = format!("pages {}", pages);
        } else {
            out.push(':');
            out.push_str(&pages);
        }
    }
    (!out.is_empty()).then_some(out)
}

/// BibTeX page ranges use `--`; render them as an en dash.
fn dash_range(pages: &str) -> String {
    pages.replace("--", "\u{2013}")
}

fn names<F: OutputFormat>(fmt: &F, names: &[Name]) -> Option<String> {
    let names: Vec<String> = names
        .iter()
        .map(|n| n.display())
        .filter(|n| !n.is_empty())
        .map(|n| fmt.text(&n))
        .collect();
    match names.as_slice() {
        [] => None,
        [one] => Some(one.clone()),
        [first, second] => Some(format!("{} and {}", first, second)),
        [init @ .., last] => Some(format!("{}, and {}", fmt.join(init.to_vec(), ", "), last)),
    }
}

fn editors<F: OutputFormat>(fmt: &F, editors: &[Name]) -> Option<String> {
    let role = if editors.len() > 1 { "editors" } else { "editor" };
    names(fmt, editors).map(|n| format!("{}, {}", n, role))
}

/// Join the present parts of one sentence block with commas.
fn list<const N: usize>(parts: [Option<String>; N]) -> Option<String> {
    let parts: Vec<String> = parts.into_iter().flatten().collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Close every present block with a period and join them with spaces.
fn sentences(blocks: Vec<Option<String>>) -> String {
    blocks
        .into_iter()
        .flatten()
        .map(|block| {
            let block = block.trim_end();
            if block.ends_with(['.', '?', '!']) {
                block.to_string()
            } else {
                format!("{}.", block)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
