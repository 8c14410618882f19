/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::reference::{Bibliography, Entry, Name, ParsedBibliography};
use crate::ProcessorError;

/// A field value as written in YAML/JSON bibliographies.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// One entry in a YAML/JSON bibliography, keyed by citation key.
#[derive(Debug, Deserialize)]
struct InputEntry {
    #[serde(rename = "type")]
    entry_type: String,
    #[serde(default)]
    author: Vec<Name>,
    #[serde(default)]
    editor: Vec<Name>,
    #[serde(flatten)]
    fields: IndexMap<String, StringOrNumber>,
}

impl InputEntry {
    fn into_entry(self, key: String) -> Entry {
        Entry {
            key,
            entry_type: self.entry_type.to_lowercase(),
            author: self.author,
            editor: self.editor,
            fields: self
                .fields
                .into_iter()
                .map(|(name, value)| (name.to_lowercase(), String::from(value)))
                .collect(),
        }
    }
}

/// Load a bibliography from a file given its path.
/// Supports BibTeX/BibLaTeX (`.bib` and anything unrecognised), and ordered
/// YAML/JSON maps of key to entry.
pub fn load_bibliography(path: &Path) -> Result<ParsedBibliography, ProcessorError> {
    let content = fs::read_to_string(path).map_err(|e| ProcessorError::parse(path, e))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("bib");

    let entries = match ext {
        "json" => {
            let map = serde_json::from_str::<IndexMap<String, InputEntry>>(&content)
                .map_err(|e| ProcessorError::parse(path, format!("JSON: {e}")))?;
            into_bibliography(map)
        }
        "yaml" | "yml" => {
            let map = serde_yaml::from_str::<IndexMap<String, InputEntry>>(&content)
                .map_err(|e| ProcessorError::parse(path, format!("YAML: {e}")))?;
            into_bibliography(map)
        }
        _ => parse_bibtex(&content).map_err(|message| ProcessorError::parse(path, message))?,
    };

    tracing::debug!(path = %path.display(), entries = entries.len(), "parsed bibliography");

    Ok(ParsedBibliography {
        path: path.to_path_buf(),
        base_dir: base_dir_of(path),
        entries,
    })
}

/// Parse BibTeX/BibLaTeX source, keeping the entries in file order.
pub fn parse_bibtex(content: &str) -> Result<Bibliography, String> {
    let parsed = biblatex::Bibliography::parse(content).map_err(|e| format!("BibTeX: {e}"))?;
    Ok(parsed
        .iter()
        .map(|entry| (entry.key.clone(), Entry::from_biblatex(entry)))
        .collect())
}

fn into_bibliography(map: IndexMap<String, InputEntry>) -> Bibliography {
    map.into_iter()
        .map(|(key, input)| (key.clone(), input.into_entry(key)))
        .collect()
}

/// The directory a bibliography's relative attachment paths resolve against.
fn base_dir_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
