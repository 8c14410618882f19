/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Papercite Processor
//!
//! This crate expands `papercite()` directives embedded in text documents
//! into rendered bibliography lists. A directive names a bibliography file
//! and, optionally, an explicit key list, type allow/deny lists and whether
//! to group entries by year:
//!
//! ```text
//! <!-- papercite("refs.bib", allow=["article"], year_group=True) -->
//! ```
//!
//! Each selected entry is rendered by a [`render::CitationStyle`] into a
//! markup dialect, anchored by its citation key, and linked to a local PDF
//! attachment when one exists next to the bibliography.
//!
//! # Example
//!
//! ```rust
//! use papercite_processor::{Processor, SelectionSpec};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let bib = dir.path().join("refs.bib");
//! std::fs::write(
//!     &bib,
//!     "@book{kuhn1962, author = {Kuhn, Thomas S.}, \
//!      title = {The Structure of Scientific Revolutions}, year = {1962}}",
//! )
//! .unwrap();
//!
//! let mut processor = Processor::default();
//! let block = processor
//!     .select_and_render(&SelectionSpec::new(&bib))
//!     .unwrap();
//! assert_eq!(
//!     block.to_string(),
//!     "- <a id=\"kuhn1962\"></a> Thomas S. Kuhn. \
//!      *The Structure of Scientific Revolutions*. 1962."
//! );
//! ```

pub mod attachment;
pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod processor;
pub mod reference;
pub mod render;
pub mod selection;

pub use cache::BibliographyCache;
pub use config::{Config, OutputKind};
pub use document::{transform_file, transform_str, DirectiveScanner};
pub use error::ProcessorError;
pub use processor::Processor;
pub use reference::{Bibliography, Entry, Name, ParsedBibliography};
pub use selection::{RenderedBlock, SelectionSpec, SortYear, YearGroup};
