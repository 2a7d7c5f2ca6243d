// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory walking for guide discovery.
//!
//! Uses the `ignore` crate, so `.gitignore` and `.ignore` files are honored.
//! Files are selected by include globs and dropped by exclude globs, both
//! matched against the path relative to the walked directory.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::config::{ConfigError, FilesConfig};

/// Options for a directory walk.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub max_depth: Option<usize>,
    /// Honor `.gitignore` files.
    pub git_ignore: bool,
    /// Skip hidden files and directories.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::from_files(&FilesConfig::default())
    }
}

impl WalkerConfig {
    pub fn from_files(files: &FilesConfig) -> Self {
        Self {
            include: files.include.clone(),
            exclude: files.exclude.clone(),
            max_depth: None,
            git_ignore: true,
            hidden: true,
        }
    }
}

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files matching an include glob.
    pub files_found: usize,
    /// Included files dropped by an exclude glob.
    pub files_excluded: usize,
    /// Entries the walker could not read.
    pub errors: usize,
}

/// Collects guide files under a directory.
pub struct FileWalker {
    config: WalkerConfig,
    include: GlobSet,
    exclude: GlobSet,
}

impl FileWalker {
    /// Compile the configured globs.
    pub fn new(config: WalkerConfig) -> Result<Self, ConfigError> {
        let include = build_globset(&config.include)?;
        let exclude = build_globset(&config.exclude)?;
        Ok(Self { config, include, exclude })
    }

    /// Walk `root` and return matching files, sorted by path.
    pub fn walk_collect(&self, root: &Path) -> (Vec<PathBuf>, WalkStats) {
        let mut stats = WalkStats::default();
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(false)
            .require_git(false)
            .max_depth(self.config.max_depth);

        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("walk error under {}: {e}", root.display());
                    stats.errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(path);
            if !self.include.is_match(relative) {
                continue;
            }
            if self.exclude.is_match(relative) {
                tracing::debug!("excluded {}", relative.display());
                stats.files_excluded += 1;
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        stats.files_found = files.len() + stats.files_excluded;
        (files, stats)
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile(pattern)?);
    }
    builder
        .build()
        .map_err(|e| ConfigError::Glob { pattern: patterns.join(", "), message: e.to_string() })
}

fn compile(pattern: &str) -> Result<Glob, ConfigError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| ConfigError::Glob { pattern: pattern.to_string(), message: e.kind().to_string() })
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
