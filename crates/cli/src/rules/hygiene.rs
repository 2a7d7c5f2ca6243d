// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules that keep test bodies simple.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

use super::snippet::Snippet;
use super::structure::describe;
use super::{Rule, Verdict};

/// Branching and looping keywords.
#[allow(clippy::expect_used)]
static LOGIC_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<kw>if|else|for|foreach|while|switch|match)\b").expect("valid regex pattern")
});

/// Tests contain no branching or loops.
pub struct NoLogicInTests;

impl Rule for NoLogicInTests {
    fn id(&self) -> &'static str {
        "no-logic-in-tests"
    }

    fn description(&self) -> &'static str {
        "Test bodies contain no if, else, for, foreach, while, switch or match"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }
        for test in snippet.tests() {
            for line in snippet.body(test) {
                if let Some(caps) = LOGIC_KEYWORD.captures(&line.code) {
                    let kw = caps.name("kw").map_or("", |m| m.as_str());
                    return Verdict::fail(format!(
                        "{} uses `{kw}` on line {}",
                        describe(test),
                        line.number
                    ));
                }
            }
        }
        Verdict::Pass
    }
}

/// Setup and teardown hooks across xUnit, NUnit, MSTest, JUnit, Jest and
/// unittest.
const SETUP_HOOKS: &[&str] = &[
    "[SetUp]",
    "[TearDown]",
    "[OneTimeSetUp]",
    "[OneTimeTearDown]",
    "[TestInitialize]",
    "[TestCleanup]",
    "@Before",
    "@After",
    "setUp(",
    "tearDown(",
    "beforeEach(",
    "afterEach(",
    "beforeAll(",
    "afterAll(",
    "def setup",
    "def teardown",
];

#[allow(clippy::expect_used)]
static SETUP_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(SETUP_HOOKS).expect("valid hook patterns"));

/// Shared state is built by helper methods the test calls, not by hooks.
pub struct PreferHelperMethods;

impl Rule for PreferHelperMethods {
    fn id(&self) -> &'static str {
        "prefer-helper-methods"
    }

    fn description(&self) -> &'static str {
        "Tests build state with helper methods instead of setup/teardown hooks"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }
        for line in snippet.lines() {
            if let Some(found) = SETUP_MATCHER.find(line.code_with_strings()) {
                let hook = SETUP_HOOKS[found.pattern().as_usize()];
                return Verdict::fail(format!(
                    "setup hook `{}` on line {}",
                    hook.trim_end_matches('('),
                    line.number
                ));
            }
        }
        Verdict::Pass
    }
}
