//! `ednactl run` — Create or reuse the named container and attach to it.

use std::io::IsTerminal;

use clap::Args;
use edna_common::config::LauncherConfig;
use edna_common::exit;
use edna_runtime::backend::ContainerEngine;
use edna_runtime::launcher::{Launcher, RunOptions, RunOutcome, SessionMode};

use super::TargetArgs;
use crate::output::{self, BOLD, RESET};

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub flags: RunFlags,
}

/// Run flags, shared with `build-and-run`.
#[derive(Args, Debug, Clone, Default)]
pub struct RunFlags {
    /// Data directory to mount; created on the host if missing.
    #[arg(long, value_name = "HOST[:CONTAINER]")]
    pub mount: Option<String>,

    /// BLAST database directory to mount; must already exist.
    #[arg(long, value_name = "HOST[:CONTAINER]")]
    pub blastdb: Option<String>,

    /// Value of the BLAST database variable inside the container.
    #[arg(long, value_name = "VALUE", env = "EDNA_BLASTDB_ENV")]
    pub blastdb_env: Option<String>,

    /// Remove an existing container and create it afresh.
    #[arg(long)]
    pub recreate: bool,

    /// Leave the container running without opening a shell.
    #[arg(short, long)]
    pub detach: bool,
}

impl RunFlags {
    /// Options for the launcher. A shell is only opened when stdin is a
    /// terminal.
    pub fn options(&self) -> RunOptions {
        let session = if !self.detach && std::io::stdin().is_terminal() {
            SessionMode::Interactive
        } else {
            SessionMode::Detached
        };
        RunOptions {
            mount: self.mount.clone(),
            blastdb: self.blastdb.clone(),
            blastdb_env: self.blastdb_env.clone(),
            recreate: self.recreate,
            session,
        }
    }
}

/// Executes the `run` command.
///
/// # Errors
///
/// Returns an error if a mount is invalid, the BLAST database directory is
/// missing, the engine is not available, or an engine operation fails.
pub fn execute(
    args: &RunArgs,
    engine: &dyn ContainerEngine,
    config: &LauncherConfig,
) -> anyhow::Result<u8> {
    output::step(&format!(
        "launching {} from {}",
        config.container_name, config.image_tag
    ));
    let outcome = Launcher::new(engine, config).run(&args.flags.options())?;
    Ok(report(outcome, config))
}

/// Reports a run outcome and returns the process exit status.
#[allow(clippy::print_stderr)]
pub fn report(outcome: RunOutcome, config: &LauncherConfig) -> u8 {
    match outcome {
        RunOutcome::Attached { exit_code } => output::session_exit_code(exit_code),
        RunOutcome::Detached => {
            output::done(&format!(
                "container {BOLD}{}{RESET} is running in the background",
                config.container_name
            ));
            eprintln!(
                "    attach with: {} exec -it {} {}",
                config.engine_binary, config.container_name, config.shell
            );
            exit::SUCCESS
        }
    }
}
