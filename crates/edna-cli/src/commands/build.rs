//! `ednactl build` — Build the image from the build context.

use std::path::PathBuf;

use clap::Args;
use edna_common::config::LauncherConfig;
use edna_common::exit;
use edna_runtime::backend::ContainerEngine;
use edna_runtime::launcher::{BuildOptions, Launcher};

use super::TargetArgs;
use crate::output;

/// Arguments for the `build` command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub flags: BuildFlags,
}

/// Build flags, shared with `build-and-run`.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildFlags {
    /// First installer artifact, relative to the build context.
    #[arg(long, value_name = "FILE")]
    pub artifact_a: Option<PathBuf>,

    /// Second installer artifact, relative to the build context.
    #[arg(long, value_name = "FILE")]
    pub artifact_b: Option<PathBuf>,

    /// Build context directory.
    #[arg(long, value_name = "DIR")]
    pub context: Option<PathBuf>,

    /// Dockerfile, relative to the build context.
    #[arg(long, value_name = "FILE")]
    pub dockerfile: Option<PathBuf>,

    /// Build without the engine's layer cache.
    #[arg(long)]
    pub no_cache: bool,

    /// Extra build argument (repeatable).
    #[arg(long = "build-arg", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub build_args: Vec<(String, String)>,
}

impl BuildArgs {
    /// Applies the flags on top of the configuration.
    pub fn apply(&self, config: &mut LauncherConfig) {
        self.target.apply(config);
        self.flags.apply(config);
    }
}

impl BuildFlags {
    /// Applies the flags on top of the configuration.
    pub fn apply(&self, config: &mut LauncherConfig) {
        let build = &mut config.build;
        if let Some(path) = &self.artifact_a {
            build.artifact_a.clone_from(path);
        }
        if let Some(path) = &self.artifact_b {
            build.artifact_b.clone_from(path);
        }
        if let Some(dir) = &self.context {
            build.context.clone_from(dir);
        }
        if let Some(file) = &self.dockerfile {
            build.dockerfile.clone_from(file);
        }
        build.args.extend(self.build_args.iter().cloned());
    }

    /// Options for the launcher.
    pub const fn options(&self) -> BuildOptions {
        BuildOptions {
            no_cache: self.no_cache,
        }
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}

/// Executes the `build` command.
///
/// # Errors
///
/// Returns an error if a build artifact is missing, the engine is not
/// available, or the build fails.
pub fn execute(
    args: &BuildArgs,
    engine: &dyn ContainerEngine,
    config: &LauncherConfig,
) -> anyhow::Result<u8> {
    output::step(&format!(
        "building {} with {}",
        config.image_tag,
        engine.binary()
    ));
    Launcher::new(engine, config).build(args.flags.options())?;
    output::done(&format!("image {} built", config.image_tag));
    Ok(exit::SUCCESS)
}
