// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use thiserror::Error;

/// Process exit codes.
///
/// - 0: every finding passed (or there were none)
/// - 1: at least one finding failed
/// - 2: configuration, usage, I/O, or parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    CheckFailed = 1,
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// A document could not be split into sections and code examples.
///
/// Always fatal: the run aborts before any report is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening fence with no matching closing fence.
    #[error("{path}:{line}: unterminated code block in section '{section}'")]
    Unterminated { path: String, section: String, line: u32 },

    /// The document is not valid UTF-8.
    #[error("{path}: document is not valid UTF-8")]
    InvalidEncoding { path: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
