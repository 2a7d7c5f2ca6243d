// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Naming rules for tests and test doubles.

use std::sync::LazyLock;

use regex::Regex;

use super::snippet::Snippet;
use super::structure::describe;
use super::{Rule, Verdict};

/// Default number of `_`-separated parts: method, scenario, expectation.
pub const DEFAULT_NAME_PARTS: usize = 3;

/// Test names read `Method_Scenario_ExpectedBehavior`.
pub struct TestNameParts {
    pub parts: usize,
}

impl TestNameParts {
    pub const ID: &'static str = "test-name-parts";
}

impl Default for TestNameParts {
    fn default() -> Self {
        Self { parts: DEFAULT_NAME_PARTS }
    }
}

impl Rule for TestNameParts {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        "Test names have three underscore-delimited parts: method, scenario, expected behavior"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }
        let mut named = 0;
        for test in snippet.tests() {
            let Some(name) = test.name.as_deref() else {
                continue;
            };
            named += 1;
            let parts: Vec<&str> = strip_test_prefix(name).split('_').collect();
            if parts.len() != self.parts || parts.iter().any(|p| p.is_empty()) {
                return Verdict::fail(format!(
                    "{} has {} name part(s), expected {}",
                    describe(test),
                    parts.iter().filter(|p| !p.is_empty()).count(),
                    self.parts
                ));
            }
        }
        if named == 0 { Verdict::undetermined("no named test functions") } else { Verdict::Pass }
    }
}

/// Drop the `test_` prefix that Python and Rust runners use for discovery.
fn strip_test_prefix(name: &str) -> &str {
    name.strip_prefix("test_").unwrap_or(name)
}

/// Variables named after a test double: `mockOrder`, `stub_repo`, `MockClock`.
#[allow(clippy::expect_used)]
static DOUBLE_BINDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<name>(?i:mock|stub)[A-Za-z0-9_]*)\s*(?::[^=]*)?=[^=>]")
        .expect("valid regex pattern")
});

/// A mock is asserted against; a stub only feeds the code under test.
pub struct DoubleNaming;

impl Rule for DoubleNaming {
    fn id(&self) -> &'static str {
        "double-naming"
    }

    fn description(&self) -> &'static str {
        "Doubles named mock are asserted against; doubles named stub are not"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }

        let mut doubles: Vec<String> = Vec::new();
        for line in snippet.lines() {
            for caps in DOUBLE_BINDING.captures_iter(&line.code) {
                if let Some(name) = caps.name("name")
                    && !doubles.iter().any(|d| d == name.as_str())
                {
                    doubles.push(name.as_str().to_string());
                }
            }
        }
        if doubles.is_empty() {
            return Verdict::undetermined("no variables named mock or stub");
        }

        let asserted: Vec<&str> = snippet.assertion_lines().map(|l| l.code.as_str()).collect();
        for name in &doubles {
            let used = asserted.iter().any(|code| contains_word(code, name));
            let is_mock = name.to_lowercase().starts_with("mock");
            if is_mock && !used {
                return Verdict::fail(format!(
                    "`{name}` is never asserted against; name it as a stub"
                ));
            }
            if !is_mock && used {
                return Verdict::fail(format!("`{name}` is asserted against; name it as a mock"));
            }
        }
        Verdict::Pass
    }
}

/// Whether `word` occurs in `text` as a whole identifier.
fn contains_word(text: &str, word: &str) -> bool {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    text.match_indices(word).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + word.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}
