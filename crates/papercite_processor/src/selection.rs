/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Selection, ordering and year grouping of bibliography keys.
//!
//! Without an explicit key list, entries are filtered by type (allow list
//! first, then deny list) and stably sorted newest first, so entries sharing
//! a year keep their bibliography file order. Grouping then cuts that
//! sequence into maximal runs of equal years; it never reorders.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::reference::{Bibliography, Entry};
use crate::render::{CitationStyle, EntryRenderer, OutputFormat};
use crate::ProcessorError;

/// The parameters of one directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSpec {
    /// Bibliography file, as written in the directive.
    pub path: PathBuf,
    /// Explicit keys, rendered in this order. Overrides filtering and sorting.
    pub keys: Option<Vec<String>>,
    /// Entry types to keep.
    pub allow: Option<Vec<String>>,
    /// Entry types to drop, applied after `allow`.
    pub deny: Option<Vec<String>>,
    /// Emit a heading before each run of entries sharing a year.
    pub year_group: bool,
}

impl SelectionSpec {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_allow<I, K>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.allow = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_deny<I, K>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.deny = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn year_grouped(mut self, year_group: bool) -> Self {
        self.year_group = year_group;
        self
    }
}

/// Sort and grouping key for an entry's year.
///
/// A missing year is the lowest value, so it sorts last when ordering newest
/// first. Two integer years compare numerically; anything else compares by
/// its trimmed text, with integers ordered before non-integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortYear<'a>(Option<&'a str>);

impl<'a> SortYear<'a> {
    pub fn of(entry: &'a Entry) -> Self {
        SortYear(entry.year())
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.0
    }
}

impl Ord for SortYear<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => match (a.parse::<i64>(), b.parse::<i64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            },
        }
    }
}

impl PartialOrd for SortYear<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A maximal run of consecutive keys sharing one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    /// `None` for entries without a year.
    pub year: Option<String>,
    pub keys: Vec<String>,
}

/// Resolve the ordered key sequence for `spec` against `entries`.
///
/// `path` only labels errors.
pub fn select_keys(
    entries: &Bibliography,
    spec: &SelectionSpec,
    path: &Path,
) -> Result<Vec<String>, ProcessorError> {
    if let Some(keys) = &spec.keys {
        if let Some(missing) = keys.iter().find(|k| !entries.contains_key(k.as_str())) {
            return Err(ProcessorError::UnknownKey {
                key: missing.clone(),
                path: path.to_path_buf(),
            });
        }
        return Ok(keys.clone());
    }

    let mut selected: Vec<&Entry> = entries
        .values()
        .filter(|e| {
            spec.allow
                .as_ref()
                .map_or(true, |allow| allow.iter().any(|t| t.eq_ignore_ascii_case(&e.entry_type)))
        })
        .filter(|e| {
            spec.deny
                .as_ref()
                .map_or(true, |deny| !deny.iter().any(|t| t.eq_ignore_ascii_case(&e.entry_type)))
        })
        .collect();

    // `sort_by` is stable, so equal years keep their file order.
    selected.sort_by(|a, b| SortYear::of(b).cmp(&SortYear::of(a)));

    Ok(selected.into_iter().map(|e| e.key.clone()).collect())
}

/// Partition `keys` into maximal contiguous runs of equal year.
///
/// Concatenating the keys of the returned groups reproduces `keys` exactly.
/// Every key must be present in `entries`.
pub fn group_by_year(entries: &Bibliography, keys: &[String]) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();
    let mut current: Option<(SortYear<'_>, Vec<String>)> = None;

    for key in keys {
        let year = entries
            .get(key.as_str())
            .map(SortYear::of)
            .unwrap_or(SortYear(None));
        if let Some((run_year, run)) = current.as_mut() {
            if *run_year == year {
                run.push(key.clone());
                continue;
            }
        }
        // The year changed: flush the run so far, whatever its length.
        if let Some((run_year, run)) = current.take() {
            groups.push(YearGroup {
                year: run_year.as_str().map(str::to_string),
                keys: run,
            });
        }
        current = Some((year, vec![key.clone()]));
    }

    // Includes a final run of a single key that only just changed the year.
    if let Some((run_year, run)) = current {
        groups.push(YearGroup {
            year: run_year.as_str().map(str::to_string),
            keys: run,
        });
    }
    groups
}

/// The textual output of one directive: rendered lines and group headings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    pub lines: Vec<String>,
}

impl RenderedBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Options that shape a rendered block beyond the per-entry text.
#[derive(Debug, Clone, Copy)]
pub struct BlockOptions<'a> {
    pub heading_level: u8,
    pub undated_label: &'a str,
}

/// Render `keys` (already selected and ordered) into a block.
pub fn render_block<F, S>(
    renderer: &EntryRenderer<'_, F, S>,
    entries: &Bibliography,
    base_dir: &Path,
    keys: &[String],
    year_group: bool,
    options: BlockOptions<'_>,
) -> RenderedBlock
where
    F: OutputFormat,
    S: CitationStyle,
{
    let mut lines = Vec::new();
    let render_keys = |lines: &mut Vec<String>, keys: &[String]| {
        for entry in keys.iter().filter_map(|k| entries.get(k.as_str())) {
            lines.push(renderer.render(entry, base_dir));
        }
    };

    if year_group {
        for group in group_by_year(entries, keys) {
            let label = group.year.as_deref().unwrap_or(options.undated_label);
            // Each group is separated from what precedes it by a blank line.
            lines.push(format!(
                "\n{}",
                renderer.format().heading(options.heading_level, label)
            ));
            render_keys(&mut lines, &group.keys);
        }
    } else {
        render_keys(&mut lines, keys);
    }

    RenderedBlock { lines }
}
