// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `guidelint.toml` when `-C` and `GUIDELINT_CONFIG` are absent.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Nearest `guidelint.toml` at or above `start_dir`.
///
/// A style guide usually lives in a `docs/` tree below the repository that
/// owns its config, so ancestors are searched too. The search ends at the
/// first directory holding `.git`: a guide vendored into another repository
/// never picks up the host repository's settings. Only regular files count.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("using config {}", candidate.display());
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
