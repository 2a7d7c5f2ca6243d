// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `-v` diagnostics for `guidelint check`.
//!
//! Plain text on stderr, grouped under titled sections. Independent of
//! `GUIDELINT_LOG`, which controls `tracing` output.

/// Stderr writer that does nothing unless `-v` was given.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{title}:");
        }
    }

    /// One line under the current section.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {msg}");
        }
    }

    /// `key: a, b, c`. Config lists such as globs and label words are often
    /// empty, which prints as `key: (none)`.
    pub fn list<I, S>(&self, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.enabled {
            self.log(&format_list(key, items));
        }
    }
}

fn format_list<I, S>(key: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items.into_iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>().join(", ");
    if joined.is_empty() { format!("{key}: (none)") } else { format!("{key}: {joined}") }
}

/// `1 guide`, `3 guides`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
