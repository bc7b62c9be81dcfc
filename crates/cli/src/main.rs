// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Junitize CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use junitize::cli::{Cli, Command};
use junitize::error::ExitCode;

mod cmd_convert;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("JUNITIZE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("junitize: {:#}", e);
            match e.downcast_ref::<junitize::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Convert(args)) => cmd_convert::run(&cli, args),
        Some(Command::Init(args)) => junitize::cmd_init::run(args),
    }
}
