// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! guidelint library.
//!
//! Checks the code samples embedded in a Markdown testing guide against the
//! structural rules the guide itself states. The pipeline is
//! extract → evaluate → report, one document at a time.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod finding;
pub mod report;
pub mod rules;
pub mod runner;
pub mod source;
pub mod verbose;
pub mod walker;

#[cfg(test)]
pub mod test_utils;
