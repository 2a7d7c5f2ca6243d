// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these via their `default_*` methods.

/// Default file selection when a directory is given on the command line.
pub mod files {
    /// Markdown files anywhere under the directory.
    pub fn include() -> Vec<String> {
        vec!["**/*.md".to_string(), "**/*.markdown".to_string()]
    }

    /// Vendored and generated trees.
    pub fn exclude() -> Vec<String> {
        vec!["**/node_modules/**".to_string(), "target/**".to_string(), "**/vendor/**".to_string()]
    }
}

/// Default label words.
pub mod labels {
    pub fn bad() -> Vec<String> {
        vec!["Bad".to_string()]
    }

    pub fn better() -> Vec<String> {
        vec!["Better".to_string(), "Good".to_string()]
    }
}

/// Config written by `guidelint init`.
pub const TEMPLATE: &str = r#"version = 1

[files]
include = ["**/*.md", "**/*.markdown"]
exclude = ["**/node_modules/**", "target/**", "**/vendor/**"]

[labels]
bad = ["Bad"]
better = ["Better", "Good"]

# Per-rule overrides, keyed by rule id (see `guidelint rules`).
#
# [rules.test-name-parts]
# check = "error"         # "error" | "off"
# applies_to = "labeled"  # "bad" | "better" | "labeled" | "any"
# parts = 3
"#;
