// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Findings: the outcome of one rule on one code example.

use std::fmt;

use serde::Serialize;

use crate::document::Label;

/// Outcome of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    /// The rule could not determine whether it applies.
    Skip,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Skip => "SKIP",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of applying one rule to one code example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Rule identifier.
    pub rule: &'static str,
    /// Position of the document in the run's input order.
    #[serde(skip)]
    pub document: usize,
    /// Document path, or `<stdin>`.
    pub path: String,
    /// Index of the enclosing section.
    pub section: usize,
    /// Title of the enclosing section.
    pub section_title: String,
    /// Example index within the section, starting at 0.
    pub example: usize,
    /// 1-indexed line of the example's opening fence.
    pub line: u32,
    pub label: Label,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Finding {
    /// Report ordering: document, section, example, then rule id.
    pub fn sort_key(&self) -> (usize, usize, usize, &'static str) {
        (self.document, self.section, self.example, self.rule)
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    pub fn failed(&self) -> bool {
        self.outcome == Outcome::Fail
    }
}
