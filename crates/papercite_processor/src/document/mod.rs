/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Document-level directive expansion.
//!
//! A directive is an HTML comment on its own line, e.g.
//! `<!-- papercite("refs.bib", year_group=True) -->`. The whole line is
//! replaced by the rendered block; every other line is copied through
//! byte for byte.

pub mod directive;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::processor::Processor;
use crate::render::CitationStyle;
use crate::ProcessorError;

/// Finds directive markers in document lines.
pub struct DirectiveScanner {
    regex: Regex,
}

impl Default for DirectiveScanner {
    fn default() -> Self {
        Self::new("papercite")
    }
}

impl DirectiveScanner {
    /// A scanner for `<!-- MARKER(...) -->`.
    pub fn new(marker: &str) -> Self {
        let pattern = format!(r"<!--\s*{}\((.*)\)\s*-->", regex::escape(marker));
        Self {
            regex: Regex::new(&pattern).unwrap(),
        }
    }

    /// The raw argument text of the directive on `line`, if there is one.
    pub fn find<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }
}

/// Expand every directive in `content`.
///
/// Relative bibliography paths are resolved against `base_dir`, the
/// directory of the document being transformed. Either the complete output
/// is returned or the first error; there is no partial result.
pub fn transform_str<S: CitationStyle>(
    processor: &mut Processor<S>,
    content: &str,
    base_dir: &Path,
) -> Result<String, ProcessorError> {
    let scanner = DirectiveScanner::new(&processor.config().marker);
    let mut output = String::with_capacity(content.len());

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let Some(arguments) = scanner.find(line) else {
            output.push_str(line);
            continue;
        };

        let line_number = index + 1;
        let mut spec = directive::parse_arguments(arguments).map_err(|message| {
            ProcessorError::DirectiveSyntax {
                line: line_number,
                directive: line.trim_end().to_string(),
                message,
            }
        })?;
        spec.path = resolve_path(base_dir, &spec.path);
        tracing::debug!(line = line_number, bibliography = %spec.path.display(), "found directive");

        let block = processor.select_and_render(&spec)?;
        output.push_str(&block.to_string());
        output.push('\n');
    }

    Ok(output)
}

/// Transform the document at `input` and write the result to `output`.
///
/// The result is staged in a temporary file next to `output` and only moved
/// into place once the whole document has been expanded.
pub fn transform_file<S: CitationStyle>(
    processor: &mut Processor<S>,
    input: &Path,
    output: &Path,
) -> Result<(), ProcessorError> {
    let content = fs::read_to_string(input)?;
    let base_dir = document_dir(input)?;
    let transformed = transform_str(processor, &content, &base_dir)?;

    let out_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(out_dir)?;
    staged.write_all(transformed.as_bytes())?;
    staged.persist(output).map_err(|e| ProcessorError::Io(e.error))?;

    tracing::info!(input = %input.display(), output = %output.display(), "wrote document");
    Ok(())
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// The absolute directory containing the document at `input`.
fn document_dir(input: &Path) -> Result<PathBuf, ProcessorError> {
    let absolute = if input.is_absolute() {
        input.to_path_buf()
    } else {
        std::env::current_dir()?.join(input)
    };
    Ok(absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/")))
}
