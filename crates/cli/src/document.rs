// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document model: sections and the code examples extracted from them.

use std::fmt;

use serde::Serialize;

/// Display title used for text that precedes the first heading.
pub const PREAMBLE_TITLE: &str = "(preamble)";

/// How the surrounding prose classifies a code example.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Preceded by a "Bad:" label.
    Bad,
    /// Preceded by a "Better:" or "Good:" label.
    Better,
    /// No label before the code region.
    Neutral,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Bad => "bad",
            Label::Better => "better",
            Label::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading-delimited part of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Position in document order. The preamble is always section 0.
    pub index: usize,
    /// Heading text, empty for the preamble.
    pub title: String,
    /// ATX heading level (1-6), 0 for the preamble.
    pub level: u8,
    /// 1-indexed line of the heading, 0 for the preamble.
    pub line: u32,
}

impl Section {
    pub(crate) fn preamble() -> Self {
        Self { index: 0, title: String::new(), level: 0, line: 0 }
    }

    /// Title for display, substituting a placeholder for the preamble.
    pub fn display_title(&self) -> &str {
        display_title(&self.title)
    }
}

/// Substitute the preamble placeholder for an empty section title.
pub fn display_title(title: &str) -> &str {
    if title.is_empty() { PREAMBLE_TITLE } else { title }
}

/// One fenced code region of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExample {
    /// Index of the enclosing section.
    pub section: usize,
    /// Title of the enclosing section.
    pub section_title: String,
    /// Sequence index within the section, starting at 0.
    pub index: usize,
    pub label: Label,
    /// First word of the fence info string, if any.
    pub lang: Option<String>,
    /// 1-indexed line of the opening fence.
    pub line: u32,
    /// Code between the fences, without the fence lines.
    pub source: String,
}

/// A parsed guide. Immutable once built by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Position of the document in the run's input order.
    pub id: usize,
    /// Path as given on the command line, or `<stdin>`.
    pub path: String,
    pub sections: Vec<Section>,
    /// Examples in document order.
    pub examples: Vec<CodeExample>,
}

impl Document {
    /// Assign the document's position in the run's input order.
    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Count examples carrying the given label.
    pub fn count_labeled(&self, label: Label) -> usize {
        self.examples.iter().filter(|e| e.label == label).count()
    }
}
