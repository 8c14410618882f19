/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of entries into markup.

pub mod djot;
pub mod entry;
pub mod format;
pub mod markdown;
pub mod plain;
pub mod style;

pub use entry::EntryRenderer;
pub use format::OutputFormat;
pub use style::{CitationStyle, PlainStyle};
