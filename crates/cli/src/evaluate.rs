// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule evaluation.
//!
//! Pure and total: every (rule, example) pair yields a finding, and
//! unrecognized syntax is a failure rather than an error.

use crate::document::{CodeExample, Document, Label};
use crate::finding::{Finding, Outcome};
use crate::rules::{Rule, RuleSet, Snippet, Verdict};

/// Which example labels a run evaluates. Empty means all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    labels: Vec<Label>,
}

impl LabelFilter {
    pub fn new(labels: &[Label]) -> Self {
        Self { labels: labels.to_vec() }
    }

    pub fn allows(&self, label: Label) -> bool {
        self.labels.is_empty() || self.labels.contains(&label)
    }
}

/// Apply one rule to one example, ignoring applicability.
pub fn evaluate(rule: &dyn Rule, doc: &Document, example: &CodeExample) -> Finding {
    finding(rule, doc, example, &Snippet::parse(&example.source))
}

fn finding(rule: &dyn Rule, doc: &Document, example: &CodeExample, snippet: &Snippet<'_>) -> Finding {
    let (outcome, message) = match rule.check(snippet) {
        Verdict::Pass => (Outcome::Pass, None),
        Verdict::Fail(message) => (Outcome::Fail, Some(message)),
        Verdict::Undetermined(reason) => {
            tracing::warn!(
                "{}:{}: {} skipped: {reason}",
                doc.path,
                example.line,
                rule.id()
            );
            (Outcome::Skip, Some(reason))
        }
    };
    Finding {
        rule: rule.id(),
        document: doc.id,
        path: doc.path.clone(),
        section: example.section,
        section_title: example.section_title.clone(),
        example: example.index,
        line: example.line,
        label: example.label,
        outcome,
        message,
    }
}

/// Apply every applicable rule to every example of a document.
///
/// Examples are visited in document order and rules in id order, so the
/// result is already sorted.
pub fn evaluate_document(rules: &RuleSet, doc: &Document, filter: &LabelFilter) -> Vec<Finding> {
    let mut findings = Vec::new();
    for example in doc.examples.iter().filter(|e| filter.allows(e.label)) {
        let snippet = Snippet::parse(&example.source);
        for configured in rules.iter().filter(|r| r.applies_to.matches(example.label)) {
            findings.push(finding(configured.rule.as_ref(), doc, example, &snippet));
        }
    }
    findings
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
