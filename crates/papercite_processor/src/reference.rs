/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliography entries as the processor sees them.
//!
//! Entries are produced once per bibliography file by [`crate::io`] and are
//! never mutated afterwards.

use std::path::PathBuf;

use biblatex::{Chunk, Person};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A collection of entries keyed by citation key, in file order.
pub type Bibliography = IndexMap<String, Entry>;

/// A person name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Name {
    pub family: String,
    pub given: String,
    pub prefix: String,
    pub suffix: String,
}

impl Name {
    pub fn new(family: &str, given: &str) -> Self {
        Self {
            family: family.to_string(),
            given: given.to_string(),
            ..Default::default()
        }
    }

    /// Render as "Given prefix Family, Suffix".
    pub fn display(&self) -> String {
        let parts: Vec<&str> = [&self.given, &self.prefix, &self.family]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        let mut name = parts.join(" ");
        if !self.suffix.trim().is_empty() {
            name.push_str(", ");
            name.push_str(self.suffix.trim());
        }
        name
    }

    fn from_biblatex(person: &Person) -> Self {
        Self {
            family: person.name.clone(),
            given: person.given_name.clone(),
            prefix: person.prefix.clone(),
            suffix: person.suffix.clone(),
        }
    }
}

/// One bibliography record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    /// Lower-cased entry type, e.g. `article` or `book`.
    pub entry_type: String,
    pub author: Vec<Name>,
    pub editor: Vec<Name>,
    /// All remaining fields as plain text, keyed by lower-case field name.
    pub fields: IndexMap<String, String>,
}

impl Entry {
    pub fn new(key: &str, entry_type: &str) -> Self {
        Self {
            key: key.to_string(),
            entry_type: entry_type.to_lowercase(),
            ..Default::default()
        }
    }

    /// Builder-style field setter, mostly for tests and fixtures.
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_lowercase(), value.to_string());
        self
    }

    pub fn with_author(mut self, name: Name) -> Self {
        self.author.push(name);
        self
    }

    /// A trimmed, non-empty field value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The chronological value used for sorting and grouping.
    ///
    /// Falls back to the year part of a BibLaTeX `date` field.
    pub fn year(&self) -> Option<&str> {
        self.field("year").or_else(|| {
            self.field("date")
                .map(|d| d.split(['-', '/']).next().unwrap_or(d))
                .filter(|y| !y.is_empty())
        })
    }

    pub fn from_biblatex(entry: &biblatex::Entry) -> Self {
        let mut fields = IndexMap::new();
        for (name, chunks) in &entry.fields {
            let name = name.to_lowercase();
            if name == "author" || name == "editor" {
                continue;
            }
            let value: String = chunks
                .iter()
                .map(|c| match &c.v {
                    Chunk::Normal(s) | Chunk::Verbatim(s) | Chunk::Math(s) => s.as_str(),
                })
                .collect();
            fields.insert(name, value);
        }

        let author: Vec<Name> = entry
            .author()
            .map(|persons| persons.iter().map(Name::from_biblatex).collect())
            .unwrap_or_default();
        let editor: Vec<Name> = entry
            .editors()
            .map(|groups| {
                groups
                    .iter()
                    .flat_map(|(persons, _)| persons.iter().map(Name::from_biblatex))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            key: entry.key.clone(),
            entry_type: entry.entry_type.to_string().to_lowercase(),
            author,
            editor,
            fields,
        }
    }
}

/// A parsed bibliography file and the directory its attachments live in.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBibliography {
    pub path: PathBuf,
    pub base_dir: PathBuf,
    pub entries: Bibliography,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_display_skips_empty_parts() {
        let name = Name {
            family: "Beethoven".to_string(),
            given: "Ludwig".to_string(),
            prefix: "van".to_string(),
            suffix: String::new(),
        };
        assert_eq!(name.display(), "Ludwig van Beethoven");

        let junior = Name {
            suffix: "Jr.".to_string(),
            ..Name::new("King", "Martin Luther")
        };
        assert_eq!(junior.display(), "Martin Luther King, Jr.");
    }

    #[test]
    fn year_falls_back_to_date() {
        let entry = Entry::new("a", "article").with_field("date", "2021-03-04");
        assert_eq!(entry.year(), Some("2021"));

        let both = Entry::new("b", "article")
            .with_field("date", "2021-03-04")
            .with_field("year", "2019");
        assert_eq!(both.year(), Some("2019"));

        let blank = Entry::new("c", "article").with_field("year", "  ");
        assert_eq!(blank.year(), None);
    }

    #[test]
    fn converts_biblatex_entries() {
        let src = r#"@article{smith2020,
            author = {Smith, Jane and van Dyke, Dick},
            title = {On Things},
            journal = {Journal of Stuff},
            year = {2020},
            file = {notes:scan.pdf:application/pdf}
        }"#;
        let bib = biblatex::Bibliography::parse(src).unwrap();
        let entry = Entry::from_biblatex(bib.get("smith2020").unwrap());

        assert_eq!(entry.key, "smith2020");
        assert_eq!(entry.entry_type, "article");
        assert_eq!(entry.year(), Some("2020"));
        assert_eq!(entry.field("title"), Some("On Things"));
        assert_eq!(entry.field("file"), Some("notes:scan.pdf:application/pdf"));
        assert_eq!(entry.author.len(), 2);
        assert_eq!(entry.author[0].display(), "Jane Smith");
        assert_eq!(entry.author[1].display(), "Dick van Dyke");
        assert!(!entry.fields.contains_key("author"));
    }
}
