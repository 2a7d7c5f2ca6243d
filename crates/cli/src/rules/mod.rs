// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule registry.
//!
//! Each rule is a structural heuristic taken from the advice a testing guide
//! gives: name tests in three parts, separate Arrange/Act/Assert, avoid
//! logic and magic strings, prefer helpers over setup hooks, and name test
//! doubles after how they are used.

mod assertions;
mod hygiene;
mod naming;
pub mod snippet;
mod structure;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{CheckLevel, Config, ConfigError};
use crate::document::Label;

pub use assertions::{NoBareAssert, NoMagicStrings};
pub use hygiene::{NoLogicInTests, PreferHelperMethods};
pub use naming::{DoubleNaming, TestNameParts};
pub use snippet::Snippet;
pub use structure::{ArrangeActAssert, SingleAct};

/// All rule identifiers, sorted.
pub const RULE_IDS: &[&str] = &[
    "arrange-act-assert",
    "double-naming",
    "no-bare-assert",
    "no-logic-in-tests",
    "no-magic-strings",
    "prefer-helper-methods",
    "single-act",
    "test-name-parts",
];

/// Which labels a rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Bad,
    Better,
    /// Either `bad` or `better`; neutral examples are skipped.
    #[default]
    Labeled,
    /// Every example, neutral included.
    Any,
}

impl Applicability {
    pub fn matches(self, label: Label) -> bool {
        match self {
            Applicability::Bad => label == Label::Bad,
            Applicability::Better => label == Label::Better,
            Applicability::Labeled => label != Label::Neutral,
            Applicability::Any => true,
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Applicability::Bad => "bad",
            Applicability::Better => "better",
            Applicability::Labeled => "labeled",
            Applicability::Any => "any",
        })
    }
}

/// Result of applying one rule to one snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(String),
    /// The rule could not tell whether it applies, e.g. a naming rule on a
    /// snippet with no named tests. Reported as a skipped finding.
    Undetermined(String),
}

impl Verdict {
    pub fn fail(message: impl Into<String>) -> Self {
        Verdict::Fail(message.into())
    }

    pub fn undetermined(reason: impl Into<String>) -> Self {
        Verdict::Undetermined(reason.into())
    }

    /// Verdict for snippets whose syntax the scanner does not understand.
    pub(crate) fn unrecognized() -> Self {
        Verdict::fail("unrecognized snippet syntax (unbalanced braces)")
    }
}

/// A structural check applied to code examples.
///
/// Implementations must be pure: the same snippet always yields the same
/// verdict.
pub trait Rule: Send + Sync {
    /// Unique kebab-case identifier.
    fn id(&self) -> &'static str;

    /// One-line description of what passes.
    fn description(&self) -> &'static str;

    /// Labels the rule applies to unless configured otherwise.
    fn default_applicability(&self) -> Applicability {
        Applicability::Labeled
    }

    fn check(&self, snippet: &Snippet<'_>) -> Verdict;
}

/// Construct every rule with its default settings, in id order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ArrangeActAssert),
        Box::new(DoubleNaming),
        Box::new(NoBareAssert),
        Box::new(NoLogicInTests),
        Box::new(NoMagicStrings),
        Box::new(PreferHelperMethods),
        Box::new(SingleAct),
        Box::new(TestNameParts::default()),
    ]
}

/// A rule together with the labels it is evaluated against.
pub struct ConfiguredRule {
    pub rule: Box<dyn Rule>,
    pub applies_to: Applicability,
}

impl ConfiguredRule {
    pub fn id(&self) -> &'static str {
        self.rule.id()
    }
}

/// The rules enabled for a run, sorted by id.
pub struct RuleSet {
    rules: Vec<ConfiguredRule>,
}

impl RuleSet {
    /// Every rule with default settings.
    pub fn defaults() -> Self {
        let rules = all_rules()
            .into_iter()
            .map(|rule| {
                let applies_to = rule.default_applicability();
                ConfiguredRule { rule, applies_to }
            })
            .collect();
        Self { rules }
    }

    /// Build the rule set described by `[rules]` in the config.
    ///
    /// Fails on unknown rule ids and invalid parameters.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        for id in config.rules.keys() {
            check_known(id)?;
        }

        let mut rules = Vec::new();
        for rule in all_rules() {
            let Some(overrides) = config.rules.get(rule.id()) else {
                let applies_to = rule.default_applicability();
                rules.push(ConfiguredRule { rule, applies_to });
                continue;
            };
            if overrides.check == Some(CheckLevel::Off) {
                tracing::debug!("rule {} disabled by config", rule.id());
                continue;
            }
            let rule: Box<dyn Rule> = match overrides.parts {
                Some(_) if rule.id() != TestNameParts::ID => {
                    return Err(ConfigError::Invalid(format!(
                        "rules.{}: `parts` only applies to {}",
                        rule.id(),
                        TestNameParts::ID
                    )));
                }
                Some(0) => {
                    return Err(ConfigError::Invalid(format!(
                        "rules.{}.parts must be at least 1",
                        TestNameParts::ID
                    )));
                }
                Some(parts) => Box::new(TestNameParts { parts }),
                None => rule,
            };
            let applies_to = overrides.applies_to.unwrap_or_else(|| rule.default_applicability());
            rules.push(ConfiguredRule { rule, applies_to });
        }
        Ok(Self { rules })
    }

    /// Restrict to `only` (when non-empty) and drop `skip`.
    ///
    /// Unknown ids in either list are an error.
    pub fn select(mut self, only: &[String], skip: &[String]) -> Result<Self, ConfigError> {
        for id in only.iter().chain(skip) {
            check_known(id)?;
        }
        self.rules.retain(|r| {
            let id = r.id();
            (only.is_empty() || only.iter().any(|o| o == id)) && !skip.iter().any(|s| s == id)
        });
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfiguredRule> {
        self.rules.iter()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(ConfiguredRule::id).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn check_known(id: &str) -> Result<(), ConfigError> {
    if RULE_IDS.contains(&id) { Ok(()) } else { Err(ConfigError::UnknownRule(id.to_string())) }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
