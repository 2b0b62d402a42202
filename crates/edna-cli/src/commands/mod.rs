//! CLI command definitions and dispatch.

pub mod build;
pub mod build_and_run;
pub mod remove;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use edna_common::config::LauncherConfig;
use edna_runtime::backend::{CliEngine, ContainerEngine, DryRunEngine};

/// ednactl — build and launch the eDNA analysis container.
#[derive(Parser, Debug)]
#[command(name = "ednactl", version, about, long_about = None)]
pub struct Cli {
    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,

    /// JSON configuration file overriding built-in defaults.
    #[arg(long, global = true, env = "EDNA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Container engine binary (docker, podman, or a path).
    #[arg(long, global = true, env = "EDNA_ENGINE")]
    pub engine: Option<String>,

    /// Print engine commands instead of running them; nothing on the host
    /// is created or changed.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available actions.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the image from the build context and two installer artifacts.
    Build(build::BuildArgs),
    /// Create or reuse the named container and open a shell in it.
    Run(run::RunArgs),
    /// Build the image, then run it.
    BuildAndRun(build_and_run::BuildAndRunArgs),
    /// Remove the named container.
    Remove(remove::RemoveArgs),
}

/// Image and container selection shared by all actions.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Image tag to build or launch.
    #[arg(long, env = "EDNA_TAG")]
    pub tag: Option<String>,

    /// Name of the long-lived container.
    #[arg(long, env = "EDNA_CONTAINER")]
    pub name: Option<String>,
}

impl TargetArgs {
    /// Applies the flags on top of the configuration.
    pub fn apply(&self, config: &mut LauncherConfig) {
        if let Some(tag) = &self.tag {
            config.image_tag.clone_from(tag);
        }
        if let Some(name) = &self.name {
            config.container_name.clone_from(name);
        }
    }
}

impl Command {
    fn apply(&self, config: &mut LauncherConfig) {
        match self {
            Self::Build(args) => args.apply(config),
            Self::Run(args) => args.target.apply(config),
            Self::BuildAndRun(args) => args.apply(config),
            Self::Remove(args) => args.target.apply(config),
        }
    }
}

/// Loads configuration, applies flag overrides and dispatches the action.
///
/// Returns the process exit status on success.
///
/// # Errors
///
/// Returns an error if configuration loading or the action fails.
#[allow(clippy::print_stdout)]
pub fn execute(cli: Cli) -> anyhow::Result<u8> {
    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "effective configuration");

    if cli.dry_run {
        let engine = DryRunEngine::new(config.engine_binary.as_str());
        let result = dispatch(&cli.command, &engine, &config);
        for line in engine.commands() {
            println!("{line}");
        }
        result
    } else {
        let engine = CliEngine::new(config.engine_binary.as_str());
        dispatch(&cli.command, &engine, &config)
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<LauncherConfig> {
    let mut config = LauncherConfig::load(cli.config.as_deref())?;
    if let Some(engine) = &cli.engine {
        config.engine_binary.clone_from(engine);
    }
    cli.command.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn dispatch(
    command: &Command,
    engine: &dyn ContainerEngine,
    config: &LauncherConfig,
) -> anyhow::Result<u8> {
    match command {
        Command::Build(args) => build::execute(args, engine, config),
        Command::Run(args) => run::execute(args, engine, config),
        Command::BuildAndRun(args) => build_and_run::execute(args, engine, config),
        Command::Remove(args) => remove::execute(args, engine, config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ednactl").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["run", "--mnt", "/x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(parse(&["start"]).is_err());
    }

    #[test]
    fn target_flags_override_config() {
        let cli = parse(&["run", "--tag", "edna:dev", "--name", "edna-dev"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.image_tag, "edna:dev");
        assert_eq!(config.container_name, "edna-dev");
    }

    #[test]
    fn global_flags_after_action() {
        let cli = parse(&["remove", "--engine", "podman", "--dry-run"]).unwrap();
        assert!(cli.dry_run);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.engine_binary, "podman");
    }

    #[test]
    fn empty_tag_fails_validation() {
        let cli = parse(&["build", "--tag", ""]).unwrap();
        assert!(resolve_config(&cli).is_err());
    }
}
