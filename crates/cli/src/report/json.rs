// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io;

use serde_json::json;
use termcolor::WriteColor;

use super::{Report, ReportFormatter};

/// JSON format report formatter. Never colored.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &Report) -> io::Result<()> {
        let value = json!({
            "passed": report.passed(),
            "findings": report.findings,
            "summary": report.summary,
        });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        Ok(())
    }
}
