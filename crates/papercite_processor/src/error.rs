/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a document transformation.
///
/// A missing or ineligible attachment is not an error; it simply renders
/// without a link.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("failed to parse bibliography {}: {message}", path.display())]
    BibliographyParse { path: PathBuf, message: String },

    #[error("citation key '{key}' not found in {}", path.display())]
    UnknownKey { key: String, path: PathBuf },

    #[error("malformed directive on line {line}: {message}\n  {directive}")]
    DirectiveSyntax {
        line: usize,
        directive: String,
        message: String,
    },

    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessorError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        ProcessorError::BibliographyParse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
