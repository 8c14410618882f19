/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use papercite_processor::{Bibliography, Entry};
use tempfile::TempDir;

/// The three-entry bibliography used throughout: A and C from 2020, B from 2019.
pub const ABC_BIB: &str = r#"
@article{A,
  author = {Doe, Jane},
  title = {Alpha},
  journal = {Journal},
  year = {2020}
}

@book{B,
  author = {Roe, Rick},
  title = {Beta},
  publisher = {Press},
  year = {2019}
}

@article{C,
  author = {Poe, Edgar},
  title = {Gamma},
  journal = {Journal},
  year = {2020}
}
"#;

/// A temporary directory holding a bibliography and, optionally, documents.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` inside the fixture, creating parent dirs.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("failed to read fixture")
    }
}

/// Build an in-memory bibliography of `(key, type, year)` triples.
pub fn make_bib(items: &[(&str, &str, Option<&str>)]) -> Bibliography {
    items
        .iter()
        .map(|(key, ty, year)| {
            let mut entry = Entry::new(key, ty);
            if let Some(year) = year {
                entry = entry.with_field("year", year);
            }
            (key.to_string(), entry)
        })
        .collect()
}

/// Citation keys of the rendered entry lines in a Markdown block, in order.
pub fn anchored_keys(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| line.strip_prefix("- <a id=\""))
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
