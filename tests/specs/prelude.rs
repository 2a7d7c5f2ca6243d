//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a Command configured to run the guidelint binary, with the
/// guidelint environment variables cleared.
pub fn guidelint_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("guidelint"));
    cmd.env_remove("GUIDELINT_CONFIG").env_remove("GUIDELINT_LOG").env_remove("NO_COLOR");
    cmd
}

/// Get path to a test fixture directory.
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A temporary project directory with a git root, so config discovery
/// never escapes it.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Write guidelint.toml.
    pub fn config(&self, content: &str) {
        self.file("guidelint.toml", content);
    }

    /// Copy a fixture guide into the project.
    pub fn guide(&self, path: &str, fixture_file: &str) {
        let content = std::fs::read_to_string(fixture(fixture_file)).unwrap();
        self.file(path, &content);
    }
}
