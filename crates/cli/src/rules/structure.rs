// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arrange-Act-Assert structure rules.

use super::snippet::{Phase, Snippet, TestFn};
use super::{Rule, Verdict};

/// Every test body is split into Arrange, Act and Assert steps, in order.
pub struct ArrangeActAssert;

impl Rule for ArrangeActAssert {
    fn id(&self) -> &'static str {
        "arrange-act-assert"
    }

    fn description(&self) -> &'static str {
        "Test bodies mark Arrange, Act and Assert steps in that order"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }
        if snippet.is_empty() {
            return Verdict::fail("snippet has no code");
        }
        for test in snippet.tests() {
            let phases: Vec<Phase> = snippet.body(test).iter().filter_map(|l| l.phase()).collect();
            if let Some(missing) = first_missing_phase(&phases) {
                return Verdict::fail(format!("{} has no {missing} step", describe(test)));
            }
        }
        Verdict::Pass
    }
}

/// Walk the markers in order, returning the first phase not found after the
/// previous one.
fn first_missing_phase(phases: &[Phase]) -> Option<&'static str> {
    let mut rest = phases.iter();
    if !rest.any(|p| *p == Phase::Arrange) {
        return Some("Arrange");
    }
    let Some(act) = rest.find(|p| p.includes_act()) else {
        return Some("Act");
    };
    if act.includes_assert() {
        return None;
    }
    if rest.any(|p| p.includes_assert()) { None } else { Some("Assert") }
}

/// A test acts exactly once.
pub struct SingleAct;

impl Rule for SingleAct {
    fn id(&self) -> &'static str {
        "single-act"
    }

    fn description(&self) -> &'static str {
        "Each test has at most one Act step"
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict {
        if snippet.is_malformed() {
            return Verdict::unrecognized();
        }
        let mut marked = false;
        for test in snippet.tests() {
            let acts = snippet.body(test).iter().filter(|l| l.phase().is_some_and(Phase::includes_act)).count();
            if acts > 1 {
                return Verdict::fail(format!("{} has {acts} Act steps", describe(test)));
            }
            marked |= acts == 1;
        }
        if marked { Verdict::Pass } else { Verdict::undetermined("no Act markers to count") }
    }
}

/// Human-readable reference to a test for messages.
pub(super) fn describe(test: &TestFn) -> String {
    match (&test.name, &test.description) {
        (Some(name), _) => format!("test `{name}`"),
        (None, Some(desc)) => format!("test \"{desc}\""),
        (None, None) => "snippet".to_string(),
    }
}
