// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use guidelint::cli::{Cli, Command};
use guidelint::error;

mod cmd_check;
mod cmd_init;
mod cmd_rules;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GUIDELINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        None => cmd_check::run(&cli, &cli.check),
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
        Some(Command::Rules(args)) => cmd_rules::run(&cli, args).map(|()| error::ExitCode::Success),
        Some(Command::Init(args)) => cmd_init::run(&cli, args).map(|()| error::ExitCode::Success),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("guidelint: {e:#}");
            error::ExitCode::Error.into()
        }
    }
}
