// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose logging helpers for the check command.

use std::path::{Path, PathBuf};

use guidelint::config::Config;
use guidelint::document::{Document, Label};
use guidelint::rules::RuleSet;
use guidelint::verbose::{VerboseLogger, plural};
use guidelint::walker::WalkStats;

pub(super) fn config(verbose: &VerboseLogger, config: &Config, config_path: Option<&Path>) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Configuration");
    match config_path {
        Some(path) => verbose.log(&format!("Config: {}", path.display())),
        None => verbose.log("Config: (defaults)"),
    }
    verbose.list("files.include", &config.files.include);
    verbose.list("files.exclude", &config.files.exclude);
    verbose.list("labels.bad", &config.labels.bad);
    verbose.list("labels.better", &config.labels.better);
}

pub(super) fn rules(verbose: &VerboseLogger, rules: &RuleSet, labels: &[Label]) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Rules");
    for rule in rules.iter() {
        verbose.log(&format!("{} (applies to {})", rule.id(), rule.applies_to));
    }
    if !labels.is_empty() {
        verbose.list("Label filter", labels.iter().map(|l| l.as_str()));
    }
}

pub(super) fn discovery(verbose: &VerboseLogger, root: &Path, files: &[PathBuf], stats: &WalkStats) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Discovery");
    verbose.log(&format!(
        "{}: {} ({} excluded, {})",
        root.display(),
        plural(files.len(), "guide"),
        stats.files_excluded,
        plural(stats.errors, "error"),
    ));
}

pub(super) fn documents(verbose: &VerboseLogger, documents: &[Document]) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Documents");
    for doc in documents {
        verbose.log(&format!(
            "{}: {}, {} bad, {} better, {} neutral",
            doc.path,
            plural(doc.sections.len(), "section"),
            doc.count_labeled(Label::Bad),
            doc.count_labeled(Label::Better),
            doc.count_labeled(Label::Neutral),
        ));
    }
}
