// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

mod verbose;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use termcolor::{ColorChoice, StandardStream};

use guidelint::cli::{CheckArgs, Cli, OutputFormat};
use guidelint::color::color_choice;
use guidelint::config::{self, Config};
use guidelint::discovery;
use guidelint::error::ExitCode;
use guidelint::evaluate::LabelFilter;
use guidelint::extract::Extractor;
use guidelint::report;
use guidelint::rules::RuleSet;
use guidelint::runner::Runner;
use guidelint::source::Source;
use guidelint::verbose::VerboseLogger;
use guidelint::walker::{FileWalker, WalkerConfig};

/// Path argument that means standard input.
const STDIN_ARG: &str = "-";

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::new(args.verbose);
    let (config, config_path) = load_config(cli)?;
    verbose::config(&verbose, &config, config_path.as_deref());

    let rules = RuleSet::from_config(&config)?.select(&args.rules, &args.no_rules)?;
    tracing::debug!("rules enabled: {}", rules.ids().join(", "));
    verbose::rules(&verbose, &rules, &args.labels);

    let sources = collect_sources(&args.paths, &config, args.max_depth, &verbose)?;

    let extractor = Extractor::new(config.labels.words());
    let filter = LabelFilter::new(&args.labels);
    let output = Runner::new(&extractor, &rules, &filter).run(&sources)?;
    verbose::documents(&verbose, &output.documents);

    // JSON is never colored.
    let choice = match args.output {
        OutputFormat::Json => ColorChoice::Never,
        OutputFormat::Text => color_choice(args.color, args.no_color),
    };
    let stdout = StandardStream::stdout(choice);
    let mut handle = stdout.lock();
    report::formatter(args.output)
        .write(&mut handle, &output.report)
        .context("failed to write report")?;
    handle.flush()?;

    Ok(if output.report.passed() { ExitCode::Success } else { ExitCode::CheckFailed })
}

/// Load the config given with `-C`, or the nearest guidelint.toml.
///
/// Returns the defaults when no file is found.
pub(crate) fn load_config(cli: &Cli) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cwd));
    let config = match &config_path {
        Some(path) => config::load_with_warnings(path)?,
        None => Config::default(),
    };
    Ok((config, config_path))
}

/// Resolve path arguments into documents, in argument order.
///
/// Directories contribute their matching files sorted by path. No
/// arguments means standard input.
fn collect_sources(
    paths: &[PathBuf],
    config: &Config,
    max_depth: Option<usize>,
    verbose: &VerboseLogger,
) -> anyhow::Result<Vec<Source>> {
    if paths.is_empty() {
        return Ok(vec![Source::stdin().context("failed to read standard input")?]);
    }

    let walker = FileWalker::new(WalkerConfig {
        max_depth,
        ..WalkerConfig::from_files(&config.files)
    })?;

    if paths.iter().filter(|p| p.as_os_str() == STDIN_ARG).count() > 1 {
        anyhow::bail!("standard input (`{STDIN_ARG}`) can only be read once");
    }

    let mut sources = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_ARG {
            sources.push(Source::stdin().context("failed to read standard input")?);
        } else if path.is_dir() {
            let (files, stats) = walker.walk_collect(path);
            verbose::discovery(verbose, path, &files, &stats);
            for file in files {
                sources.push(read(&file)?);
            }
        } else {
            sources.push(read(path)?);
        }
    }
    Ok(sources)
}

fn read(path: &Path) -> anyhow::Result<Source> {
    Source::from_path(path).with_context(|| format!("failed to read {}", path.display()))
}
