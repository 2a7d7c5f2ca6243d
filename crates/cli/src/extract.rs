// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Code example extraction.
//!
//! Splits a Markdown guide into sections at ATX headings and collects the
//! fenced code regions of each section. A region is labeled by the most
//! recent "Bad:" / "Better:" / "Good:" line since the previous region in the
//! same section, and is `neutral` otherwise. A heading whose title is a label
//! (`#### Bad:`) labels the next region without opening a section.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{CodeExample, Document, Label, Section};
use crate::error::ParseError;

/// ATX heading: up to three spaces, 1-6 `#`, then whitespace or end of line.
/// An optional closing sequence of `#` is dropped from the title.
#[allow(clippy::expect_used)]
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?(?:[ \t]+#+)?[ \t]*$").expect("valid regex pattern")
});

/// Suppression marker placed on the line before a fence.
#[allow(clippy::expect_used)]
static IGNORE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<!--\s*guidelint-ignore\s*-->\s*$").expect("valid regex pattern")
});

/// Label words recognised before a code region, stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelWords {
    bad: Vec<String>,
    better: Vec<String>,
}

impl Default for LabelWords {
    fn default() -> Self {
        Self::new(&["Bad".to_string()], &["Better".to_string(), "Good".to_string()])
    }
}

impl LabelWords {
    pub fn new(bad: &[String], better: &[String]) -> Self {
        Self {
            bad: bad.iter().map(|w| w.trim().to_lowercase()).collect(),
            better: better.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    /// Classify a prose line as a label line.
    ///
    /// Accepts `Bad:`, `**Bad:**`, `**Bad**:`, `- _Good:_ ...` and similar:
    /// list and quote markers and emphasis are stripped before matching the
    /// word that precedes the first colon.
    pub fn classify(&self, line: &str) -> Option<Label> {
        let text = strip_line_markers(line.trim());
        let text = text.trim_start_matches(['*', '_']);
        let (word, _) = text.split_once(':')?;
        let word = word.trim().trim_end_matches(['*', '_']).trim().to_lowercase();
        if word.is_empty() {
            return None;
        }
        if self.bad.contains(&word) {
            Some(Label::Bad)
        } else if self.better.contains(&word) {
            Some(Label::Better)
        } else {
            None
        }
    }
}

impl LabelWords {
    /// Classify a heading title as a label: `Bad:`, `Better: ...` or a bare
    /// `Good`.
    pub fn classify_heading(&self, title: &str) -> Option<Label> {
        if let Some(label) = self.classify(title) {
            return Some(label);
        }
        let word = title.trim().trim_matches(['*', '_']).trim().to_lowercase();
        if self.bad.contains(&word) {
            Some(Label::Bad)
        } else if self.better.contains(&word) {
            Some(Label::Better)
        } else {
            None
        }
    }
}

/// Strip a leading blockquote or list marker (`>`, `-`, `*`, `+`, `1.`, `1)`).
fn strip_line_markers(mut text: &str) -> &str {
    while let Some(rest) = text.strip_prefix('>') {
        text = rest.trim_start();
    }
    for bullet in ["- ", "* ", "+ "] {
        if let Some(rest) = text.strip_prefix(bullet) {
            return rest.trim_start();
        }
    }
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let rest = &text[digits..];
        if let Some(rest) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return rest.trim_start();
        }
    }
    text
}

/// An opening code fence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
    indent: usize,
    lang: Option<String>,
}

impl Fence {
    /// Recognise an opening fence: up to three spaces of indentation, then
    /// three or more backticks or tildes and an optional info string.
    fn open(line: &str) -> Option<Self> {
        let indent = line.bytes().take_while(|&b| b == b' ').count();
        if indent > 3 {
            return None;
        }
        let rest = &line[indent..];
        let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = rest.chars().take_while(|&c| c == marker).count();
        if len < 3 {
            return None;
        }
        let info = rest[len..].trim();
        // A backtick fence's info string may not itself contain backticks.
        if marker == '`' && info.contains('`') {
            return None;
        }
        let lang = info.split_whitespace().next().map(str::to_string);
        Some(Self { marker, len, indent, lang })
    }

    /// Whether `line` closes this fence.
    fn closes(&self, line: &str) -> bool {
        let indent = line.bytes().take_while(|&b| b == b' ').count();
        if indent > 3 {
            return false;
        }
        let rest = &line[indent..];
        let len = rest.chars().take_while(|&c| c == self.marker).count();
        len >= self.len && rest[len..].trim().is_empty()
    }

    /// Remove up to the fence's own indentation from a content line.
    fn strip_indent<'a>(&self, line: &'a str) -> &'a str {
        let spaces = line.bytes().take(self.indent).take_while(|&b| b == b' ').count();
        &line[spaces..]
    }
}

/// Parse an ATX heading into (level, title).
fn heading(line: &str) -> Option<(u8, String)> {
    let caps = HEADING.captures(line)?;
    let level = caps.get(1).map_or(0, |m| m.as_str().len()) as u8;
    let title = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
    Some((level, title))
}

/// Splits documents into sections and labeled code examples.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    labels: LabelWords,
}

impl Extractor {
    pub fn new(labels: LabelWords) -> Self {
        Self { labels }
    }

    /// Extract sections and code examples from `text`.
    ///
    /// Fails with [`ParseError::Unterminated`] when a fence is never closed.
    pub fn extract(&self, path: &str, text: &str) -> Result<Document, ParseError> {
        let mut sections = vec![Section::preamble()];
        let mut examples = Vec::new();
        let mut pending_label: Option<Label> = None;
        let mut ignore_next = false;
        let mut section_examples = 0usize;

        let mut lines = text.lines().enumerate();
        while let Some((idx, line)) = lines.next() {
            let line_num = idx as u32 + 1;

            if let Some(fence) = Fence::open(line) {
                let mut body = Vec::new();
                let mut closed = false;
                for (_, inner) in lines.by_ref() {
                    if fence.closes(inner) {
                        closed = true;
                        break;
                    }
                    body.push(fence.strip_indent(inner));
                }

                let current = sections.last().map_or(String::new(), |s| s.title.clone());
                if !closed {
                    return Err(ParseError::Unterminated {
                        path: path.to_string(),
                        section: crate::document::display_title(&current).to_string(),
                        line: line_num,
                    });
                }

                if ignore_next {
                    tracing::debug!("{path}:{line_num}: code block suppressed");
                } else {
                    let mut source = body.join("\n");
                    if !body.is_empty() {
                        source.push('\n');
                    }
                    examples.push(CodeExample {
                        section: sections.len() - 1,
                        section_title: current,
                        index: section_examples,
                        label: pending_label.unwrap_or(Label::Neutral),
                        lang: fence.lang,
                        line: line_num,
                        source,
                    });
                    section_examples += 1;
                }
                pending_label = None;
                ignore_next = false;
                continue;
            }

            if let Some((level, title)) = heading(line) {
                // `#### Bad:` labels the next region and stays in the current section.
                if let Some(label) = self.labels.classify_heading(&title) {
                    pending_label = Some(label);
                    ignore_next = false;
                    continue;
                }
                sections.push(Section { index: sections.len(), title, level, line: line_num });
                pending_label = None;
                ignore_next = false;
                section_examples = 0;
                continue;
            }

            if IGNORE_MARKER.is_match(line) {
                ignore_next = true;
                continue;
            }

            if line.trim().is_empty() {
                continue;
            }
            ignore_next = false;
            if let Some(label) = self.labels.classify(line) {
                pending_label = Some(label);
            }
        }

        tracing::debug!(
            "{path}: {} sections, {} code examples",
            sections.len(),
            examples.len()
        );
        Ok(Document { id: 0, path: path.to_string(), sections, examples })
    }
}

/// Extract with the default label words.
pub fn extract(path: &str, text: &str) -> Result<Document, ParseError> {
    Extractor::default().extract(path, text)
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
