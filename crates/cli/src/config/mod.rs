// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! `guidelint.toml` is optional; every key has a default. Unknown top-level
//! keys are warned about, unknown rule ids are errors.

pub mod defaults;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::extract::LabelWords;
use crate::rules::Applicability;

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "guidelint.toml";

/// The only supported config schema version.
pub const CONFIG_VERSION: i64 = 1;

const KNOWN_KEYS: &[&str] = &["version", "files", "labels", "rules"];

/// Configuration could not be loaded or is invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported config version {0} (expected {CONFIG_VERSION})")]
    UnsupportedVersion(i64),

    #[error("unknown rule `{0}` (see `guidelint rules`)")]
    UnknownRule(String),

    #[error("invalid glob pattern `{pattern}`: {message}")]
    Glob { pattern: String, message: String },

    #[error("{0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema version, must be 1.
    pub version: i64,

    /// Which files a directory argument expands to.
    pub files: FilesConfig,

    /// Words that label a code example.
    pub labels: LabelsConfig,

    /// Per-rule overrides keyed by rule id.
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            files: FilesConfig::default(),
            labels: LabelsConfig::default(),
            rules: BTreeMap::new(),
        }
    }
}

/// File selection for directory arguments.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Glob patterns, relative to the directory, of files to check.
    pub include: Vec<String>,

    /// Glob patterns of files to skip.
    pub exclude: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self { include: defaults::files::include(), exclude: defaults::files::exclude() }
    }
}

/// Label words, matched case-insensitively before a colon.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub bad: Vec<String>,
    pub better: Vec<String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self { bad: defaults::labels::bad(), better: defaults::labels::better() }
    }
}

impl LabelsConfig {
    pub fn words(&self) -> LabelWords {
        LabelWords::new(&self.bad, &self.better)
    }
}

/// Overrides for a single rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// "error" (default) or "off".
    pub check: Option<CheckLevel>,

    /// Labels the rule is evaluated against.
    pub applies_to: Option<Applicability>,

    /// Name part count, for `test-name-parts` only.
    pub parts: Option<usize>,
}

/// Whether a rule runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    #[default]
    Error,
    Off,
}

/// Load and validate a config file, warning about unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    parse_with_warnings(&text, path)
}

/// Parse config text. `path` is used for messages only.
pub fn parse_with_warnings(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let parse_error =
        |e: toml::de::Error| ConfigError::Parse { path: path.to_path_buf(), message: e.message().to_string() };

    let table: toml::Table = toml::from_str(text).map_err(parse_error)?;
    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            tracing::warn!("{}: unknown config key `{key}`", path.display());
        }
    }

    let config: Config = toml::from_str(text).map_err(parse_error)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }

        let bad = normalized(&self.labels.bad);
        let better = normalized(&self.labels.better);
        if bad.is_empty() || better.is_empty() {
            return Err(ConfigError::Invalid("labels.bad and labels.better must not be empty".into()));
        }
        if bad.iter().any(|w| w.is_empty() || w.contains(':'))
            || better.iter().any(|w| w.is_empty() || w.contains(':'))
        {
            return Err(ConfigError::Invalid("label words must be non-empty and contain no ':'".into()));
        }
        if let Some(word) = bad.iter().find(|w| better.contains(w)) {
            return Err(ConfigError::Invalid(format!(
                "label word `{word}` is listed as both bad and better"
            )));
        }
        Ok(())
    }
}

fn normalized(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.trim().to_lowercase()).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
