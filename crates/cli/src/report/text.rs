// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! One line per finding, `section | example | rule | OUTCOME`, then the
//! per-rule summary. An empty report writes nothing.

use std::io;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::document::display_title;
use crate::finding::Outcome;

use super::{Report, ReportFormatter};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &Report) -> io::Result<()> {
        if report.findings.is_empty() {
            return Ok(());
        }

        for finding in &report.findings {
            if report.multi_document {
                out.set_color(&scheme::path())?;
                write!(out, "{}", finding.path)?;
                out.reset()?;
                write!(out, " | ")?;
            }
            out.set_color(&scheme::section())?;
            write!(out, "{}", display_title(&finding.section_title))?;
            out.reset()?;
            write!(out, " | {} | {} | ", finding.example, finding.rule)?;
            out.set_color(&outcome_color(finding.outcome))?;
            write!(out, "{}", finding.outcome)?;
            out.reset()?;
            writeln!(out)?;

            if let Some(message) = &finding.message {
                out.set_color(&scheme::message())?;
                write!(out, "  {message}")?;
                out.reset()?;
                writeln!(out)?;
            }
        }

        writeln!(out)?;
        for (rule, tally) in &report.summary.rules {
            writeln!(
                out,
                "{rule}: {} passed, {} failed, {} skipped",
                tally.passed, tally.failed, tally.skipped
            )?;
        }
        let summary = &report.summary;
        write!(out, "total: {} passed, ", summary.passed)?;
        if summary.failed > 0 {
            out.set_color(&scheme::fail())?;
        }
        write!(out, "{} failed", summary.failed)?;
        out.reset()?;
        writeln!(out, ", {} skipped", summary.skipped)?;
        Ok(())
    }
}

fn outcome_color(outcome: Outcome) -> termcolor::ColorSpec {
    match outcome {
        Outcome::Pass => scheme::pass(),
        Outcome::Fail => scheme::fail(),
        Outcome::Skip => scheme::skip(),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
