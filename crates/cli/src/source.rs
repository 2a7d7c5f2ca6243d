// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document sources with a size-based read strategy.
//!
//! - < 64 KiB: read into a buffer
//! - >= 64 KiB: memory-mapped
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// The mapping is read-only, and a guide edited during a run only yields a
// stale report.
#![allow(unsafe_code)]

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Display name for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Raw bytes of a document, owned or memory-mapped.
pub enum FileContent {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl FileContent {
    /// Read a file using the strategy for its size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();
        if size < MMAP_THRESHOLD {
            return Ok(FileContent::Owned(fs::read(path)?));
        }
        let file = File::open(path)?;
        // SAFETY: the handle was just opened and the mapping is never written.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(FileContent::Mapped(mmap))
    }

    /// Read all of standard input.
    pub fn read_stdin() -> io::Result<Self> {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(FileContent::Owned(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes,
            FileContent::Mapped(mmap) => mmap,
        }
    }

    /// Content as text, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }
}

/// A named document waiting to be checked.
pub struct Source {
    /// Path as given on the command line, or `<stdin>`.
    pub name: String,
    pub content: FileContent,
}

impl Source {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        Ok(Self { name: path.display().to_string(), content: FileContent::read(path)? })
    }

    pub fn stdin() -> io::Result<Self> {
        Ok(Self { name: STDIN_NAME.to_string(), content: FileContent::read_stdin()? })
    }

    /// An in-memory document.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), content: FileContent::Owned(text.into().into_bytes()) }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
