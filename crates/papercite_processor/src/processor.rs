/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The selection and grouping engine.

use crate::cache::BibliographyCache;
use crate::config::{Config, OutputKind};
use crate::render::djot::Djot;
use crate::render::markdown::Markdown;
use crate::render::plain::PlainText;
use crate::render::{CitationStyle, EntryRenderer, OutputFormat, PlainStyle};
use crate::selection::{render_block, select_keys, BlockOptions, RenderedBlock, SelectionSpec};
use crate::ProcessorError;

/// Expands selection specs into rendered blocks.
///
/// Owns the bibliography cache, so every directive processed through one
/// `Processor` shares parsed bibliographies.
pub struct Processor<S: CitationStyle = PlainStyle> {
    config: Config,
    cache: BibliographyCache,
    style: S,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Self::with_style(config, PlainStyle)
    }
}

impl<S: CitationStyle> Processor<S> {
    pub fn with_style(config: Config, style: S) -> Self {
        let cache = BibliographyCache::new(config.cache_capacity);
        Self {
            config,
            cache,
            style,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &BibliographyCache {
        &self.cache
    }

    /// Render `spec` in the configured output format.
    ///
    /// `spec.path` is used as given; callers resolve relative paths first.
    pub fn select_and_render(
        &mut self,
        spec: &SelectionSpec,
    ) -> Result<RenderedBlock, ProcessorError> {
        match self.config.format {
            OutputKind::Markdown => self.select_and_render_with_format::<Markdown>(spec),
            OutputKind::Djot => self.select_and_render_with_format::<Djot>(spec),
            OutputKind::Plain => self.select_and_render_with_format::<PlainText>(spec),
        }
    }

    /// Render `spec` using a specific output format.
    pub fn select_and_render_with_format<F: OutputFormat>(
        &mut self,
        spec: &SelectionSpec,
    ) -> Result<RenderedBlock, ProcessorError> {
        let bibliography = self.cache.get(&spec.path)?;
        let keys = select_keys(&bibliography.entries, spec, &spec.path)?;

        let renderer = EntryRenderer::<F, S>::new(
            &self.style,
            &self.config.attachment_icon,
            &self.config.attachment_suffix,
        );
        let options = BlockOptions {
            heading_level: self.config.heading_level,
            undated_label: &self.config.undated_label,
        };
        let block = render_block(
            &renderer,
            &bibliography.entries,
            &bibliography.base_dir,
            &keys,
            spec.year_group,
            options,
        );

        tracing::info!(
            bibliography = %spec.path.display(),
            entries = keys.len(),
            grouped = spec.year_group,
            "expanded directive"
        );
        Ok(block)
    }
}
