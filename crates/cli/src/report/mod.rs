// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Findings are sorted and summarized once, then written as text or JSON.

mod json;
mod text;

use std::collections::BTreeMap;
use std::io;

use serde::Serialize;
use termcolor::{NoColor, WriteColor};

use crate::cli::OutputFormat;
use crate::finding::{Finding, Outcome};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Per-rule outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleTally {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RuleTally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail => self.failed += 1,
            Outcome::Skip => self.skipped += 1,
        }
    }
}

/// Outcome counts grouped by rule id, plus totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub rules: BTreeMap<&'static str, RuleTally>,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Count findings by rule and outcome.
pub fn summarize(findings: &[Finding]) -> Summary {
    let mut summary = Summary::default();
    let mut totals = RuleTally::default();
    for finding in findings {
        summary.rules.entry(finding.rule).or_default().record(finding.outcome);
        totals.record(finding.outcome);
    }
    summary.passed = totals.passed;
    summary.failed = totals.failed;
    summary.skipped = totals.skipped;
    summary
}

/// Sorted findings with their summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub summary: Summary,
    /// More than one document was checked; text lines carry the path.
    pub multi_document: bool,
}

impl Report {
    /// Sort `findings` into report order and summarize them.
    pub fn new(mut findings: Vec<Finding>, documents: usize) -> Self {
        findings.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        let summary = summarize(&findings);
        Self { findings, summary, multi_document: documents > 1 }
    }

    /// No finding failed. Skips never fail a run.
    pub fn passed(&self) -> bool {
        self.summary.failed == 0
    }
}

/// Writes a report in one output format.
pub trait ReportFormatter {
    /// Write the report. Formats without color ignore the writer's color
    /// support.
    fn write(&self, out: &mut dyn WriteColor, report: &Report) -> io::Result<()>;
}

/// Select the formatter for an output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Render a report to a string without color.
pub fn format_report(format: OutputFormat, report: &Report) -> io::Result<String> {
    let mut out = NoColor::new(Vec::new());
    formatter(format).write(&mut out, report)?;
    String::from_utf8(out.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
