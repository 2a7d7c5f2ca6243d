// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use anyhow::{Context, bail};

use guidelint::cli::{Cli, InitArgs};
use guidelint::config::{CONFIG_FILE, defaults};

/// Write the default guidelint.toml to the current directory, or to the
/// `-C` path when one is given.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            cwd.join(CONFIG_FILE)
        }
    };

    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(&path, defaults::TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Created {}", path.display());
    Ok(())
}
