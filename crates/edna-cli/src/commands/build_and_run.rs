//! `ednactl build-and-run` — Build the image, then run it.

use clap::Args;
use edna_common::config::LauncherConfig;
use edna_runtime::backend::ContainerEngine;
use edna_runtime::launcher::Launcher;

use super::TargetArgs;
use super::build::BuildFlags;
use super::run::{self, RunFlags};
use crate::output;

/// Arguments for the `build-and-run` command.
#[derive(Args, Debug)]
pub struct BuildAndRunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub build: BuildFlags,

    #[command(flatten)]
    pub run: RunFlags,
}

impl BuildAndRunArgs {
    /// Applies the flags on top of the configuration.
    pub fn apply(&self, config: &mut LauncherConfig) {
        self.target.apply(config);
        self.build.apply(config);
    }
}

/// Executes the `build-and-run` command.
///
/// Mounts are validated before the build starts, so a bad `--mount` fails
/// fast instead of after a long build.
///
/// # Errors
///
/// Returns the first failing precondition, build or engine error.
pub fn execute(
    args: &BuildAndRunArgs,
    engine: &dyn ContainerEngine,
    config: &LauncherConfig,
) -> anyhow::Result<u8> {
    output::step(&format!(
        "building {} and launching {}",
        config.image_tag, config.container_name
    ));
    let outcome = Launcher::new(engine, config)
        .build_and_run(args.build.options(), &args.run.options())?;
    Ok(run::report(outcome, config))
}
