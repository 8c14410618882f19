/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bounded memoization of parsed bibliography files.
//!
//! A document usually references the same bibliography from many
//! directives; each distinct path is parsed once and then served from here
//! until it falls out of the least-recently-used window.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::io::load_bibliography;
use crate::reference::ParsedBibliography;
use crate::ProcessorError;

/// Default number of distinct bibliography files kept parsed.
pub const DEFAULT_CAPACITY: usize = 64;

/// Least-recently-used cache keyed by bibliography path.
///
/// Entries are ordered from least (front) to most (back) recently used.
#[derive(Debug)]
pub struct BibliographyCache {
    capacity: usize,
    entries: IndexMap<PathBuf, Arc<ParsedBibliography>>,
}

impl Default for BibliographyCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BibliographyCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: IndexMap::new(),
        }
    }

    /// Return the parsed bibliography at `path`, parsing it on first use.
    ///
    /// Parse failures are returned and not remembered, so a later call for the
    /// same path tries again.
    pub fn get(&mut self, path: &Path) -> Result<Arc<ParsedBibliography>, ProcessorError> {
        if let Some(index) = self.entries.get_index_of(path) {
            let last = self.entries.len() - 1;
            self.entries.move_index(index, last);
            tracing::debug!(path = %path.display(), "bibliography cache hit");
            return Ok(Arc::clone(&self.entries[last]));
        }

        tracing::debug!(path = %path.display(), "bibliography cache miss");
        let parsed = Arc::new(load_bibliography(path)?);

        if self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                tracing::debug!(path = %evicted.display(), "evicted bibliography");
            }
        }
        self.entries.insert(path.to_path_buf(), Arc::clone(&parsed));
        Ok(parsed)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
