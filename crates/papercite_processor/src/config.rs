/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Processor configuration.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! same output as the stock `papercite` behaviour: Markdown lists, `###`
//! year headings and a `pdf.svg` attachment icon.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProcessorError;

/// The markup dialect rendered blocks are written in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Markdown,
    Djot,
    Plain,
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputKind::Markdown => write!(f, "markdown"),
            OutputKind::Djot => write!(f, "djot"),
            OutputKind::Plain => write!(f, "plain"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Output dialect for rendered entries and headings.
    pub format: OutputKind,
    /// Number of distinct bibliography files kept parsed at once.
    pub cache_capacity: usize,
    /// Heading level used for year groups.
    pub heading_level: u8,
    /// Image shown next to an entry that has a linkable attachment.
    pub attachment_icon: String,
    /// Case-insensitive suffix an attachment path must end with to be linked.
    pub attachment_suffix: String,
    /// Heading for the group of entries without a year.
    pub undated_label: String,
    /// Name of the directive inside the HTML comment, e.g. `papercite(...)`.
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputKind::Markdown,
            cache_capacity: crate::cache::DEFAULT_CAPACITY,
            heading_level: 3,
            attachment_icon: "pdf.svg".to_string(),
            attachment_suffix: crate::attachment::DEFAULT_SUFFIX.to_string(),
            undated_label: "Undated".to_string(),
            marker: "papercite".to_string(),
        }
    }
}

impl Config {
    /// Load a configuration file. JSON is used for `.json`, YAML otherwise.
    pub fn load(path: &Path) -> Result<Self, ProcessorError> {
        let content = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

        let parsed = match ext {
            "json" => serde_json::from_str::<Config>(&content).map_err(|e| e.to_string()),
            _ if content.trim().is_empty() => Ok(Config::default()),
            _ => serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ProcessorError::Config {
            path: path.to_path_buf(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "format: djot\nheading-level: 2").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.format, OutputKind::Djot);
        assert_eq!(config.heading_level, 2);
        assert_eq!(config.cache_capacity, 64);
        assert_eq!(config.attachment_icon, "pdf.svg");
    }

    #[test]
    fn json_config_is_supported() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"undated-label": "n.d.", "cache-capacity": 4}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.undated_label, "n.d.");
        assert_eq!(config.cache_capacity, 4);
    }

    #[test]
    fn unknown_field_is_a_config_error() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "colour: blue").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ProcessorError::Config { .. }));
    }
}
