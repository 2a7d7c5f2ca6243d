// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules about how tests verify outcomes.

use std::sync::LazyLock;

use regex::Regex;

use super::snippet::Snippet;
use super::{Rule, Verdict};

/// Assertions that take a bare condition and report nothing useful on failure.
#[allow(clippy::expect_used)]
static BARE_ASSERT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\w.])(?:debug_)?assert!?\s*\(|\bDebug\.Assert\s*\(|^\s*assert\s")
        .expect("valid regex pattern")
});

/// Assertions go through a framework or helper that reports expected and
/// actual values.
pub struct NoBareAssert;

impl Rule for NoBareAssert {
    fn id(&self) -> &'static str {
        "no-bare-assert"
    }

    fn description(&self) -> &'static str {
        "Assertions use a framework or helper method, not a bare assert(condition)"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }
        let mut any = false;
        for line in snippet.assertion_lines() {
            any = true;
            if BARE_ASSERT.is_match(&line.code) {
                return Verdict::fail(format!("bare assertion on line {}", line.number));
            }
        }
        if any { Verdict::Pass } else { Verdict::undetermined("no assertions to inspect") }
    }
}

/// A string literal passed straight into a call: `Add("1001")`, `f(x, 'a b')`.
#[allow(clippy::expect_used)]
static LITERAL_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:\b(?P<callee>[A-Za-z_][A-Za-z0-9_]*!?)\s*)?(?P<delim>[(,])\s*[@$]?(?:"|'[^']{2,}')"#)
        .expect("valid regex pattern")
});

/// Lines that declare a named constant: `const string MAX = "1001";`.
#[allow(clippy::expect_used)]
static CONSTANT_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:const|static|readonly|final)\b|^\s*(?:(?:let|var)\s+)?[A-Z][A-Z0-9_]+\s*(?::[^=]*)?=")
        .expect("valid regex pattern")
});

/// Calls whose first string argument is a description or diagnostic message
/// rather than an input to the code under test.
const MESSAGE_CALLS: &[&str] = &[
    "it",
    "test",
    "describe",
    "context",
    "expect",
    "panic!",
    "println!",
    "eprintln!",
    "format!",
    "unreachable!",
];

/// Inputs and expectations are named constants, not literals in calls.
pub struct NoMagicStrings;

impl Rule for NoMagicStrings {
    fn id(&self) -> &'static str {
        "no-magic-strings"
    }

    fn description(&self) -> &'static str {
        "String literals are bound to named constants instead of passed directly to calls"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }
        for line in snippet.lines() {
            let code = line.code_with_strings();
            let trimmed = code.trim_start();
            // Attributes and annotations carry test data, e.g. [InlineData("1,2")].
            if trimmed.starts_with('[') || trimmed.starts_with("#[") || trimmed.starts_with('@') {
                continue;
            }
            if CONSTANT_DECLARATION.is_match(code) {
                continue;
            }
            let magic = LITERAL_ARGUMENT.captures_iter(code).any(|caps| {
                let message = caps.name("delim").is_some_and(|d| d.as_str() == "(")
                    && caps.name("callee").is_some_and(|c| MESSAGE_CALLS.contains(&c.as_str()));
                !message
            });
            if magic {
                return Verdict::fail(format!(
                    "string literal passed to a call on line {}",
                    line.number
                ));
            }
        }
        Verdict::Pass
    }
}
