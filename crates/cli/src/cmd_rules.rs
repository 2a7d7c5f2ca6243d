// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules command implementation.

use std::io::Write;

use serde_json::json;

use guidelint::cli::{Cli, OutputFormat, RulesArgs};
use guidelint::rules::{RuleSet, all_rules};

use crate::cmd_check::load_config;

/// List every rule with its effective applicability.
///
/// Rules turned off in the config are listed as `off`.
pub fn run(cli: &Cli, args: &RulesArgs) -> anyhow::Result<()> {
    let (config, _) = load_config(cli)?;
    let enabled = RuleSet::from_config(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            for rule in all_rules() {
                let applies_to = match enabled.iter().find(|r| r.id() == rule.id()) {
                    Some(configured) => configured.applies_to.to_string(),
                    None => "off".to_string(),
                };
                writeln!(out, "{:<22} {:<8} {}", rule.id(), applies_to, rule.description())?;
            }
        }
        OutputFormat::Json => {
            let rules: Vec<_> = all_rules()
                .iter()
                .map(|rule| {
                    let configured = enabled.iter().find(|r| r.id() == rule.id());
                    json!({
                        "id": rule.id(),
                        "enabled": configured.is_some(),
                        "applies_to": configured.map(|r| r.applies_to),
                        "description": rule.description(),
                    })
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &rules)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
