//! # ednactl
//!
//! Builds the eDNA analysis image and manages its single long-lived
//! container: mounts, environment and an interactive shell.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use edna_common::error::EdnaError;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(&err),
    };
    init_tracing(cli.log_json);

    match commands::execute(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            output::report_error(&err);
            ExitCode::from(output::exit_code_of(&err))
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Prints help and version normally; every other parse failure is an
/// unknown-argument error.
fn usage_error(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
            ExitCode::SUCCESS
        }
        _ => ExitCode::from(
            EdnaError::UnknownArgument {
                message: err.to_string(),
            }
            .exit_code(),
        ),
    }
}
