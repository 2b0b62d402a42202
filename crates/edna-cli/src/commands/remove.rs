//! `ednactl remove` — Remove the named container.

use clap::Args;
use edna_common::config::LauncherConfig;
use edna_common::exit;
use edna_runtime::backend::ContainerEngine;
use edna_runtime::launcher::Launcher;

use super::TargetArgs;
use crate::output;

/// Arguments for the `remove` command.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Executes the `remove` command.
///
/// # Errors
///
/// Returns an error if the engine is not available or removal fails.
pub fn execute(
    _args: &RemoveArgs,
    engine: &dyn ContainerEngine,
    config: &LauncherConfig,
) -> anyhow::Result<u8> {
    if Launcher::new(engine, config).remove()? {
        output::done(&format!("container {} removed", config.container_name));
    } else {
        output::step(&format!("no container named {}", config.container_name));
    }
    Ok(exit::SUCCESS)
}
