//! Action orchestration: build, run, build-and-run, remove.
//!
//! Every action checks all of its preconditions first and only then issues
//! mutating engine calls, so a failed check leaves nothing behind.

use std::collections::BTreeMap;
use std::path::Path;

use edna_common::config::LauncherConfig;
use edna_common::constants;
use edna_common::error::{EdnaError, Result};
use edna_common::types::{BlastDbSpec, ContainerName, ContainerStatus, MountSpec};
use edna_core::mount::{BlastDbResolver, MountResolver};
use edna_core::preflight;

use crate::backend::{BuildRequest, ContainerEngine, CreateRequest};

/// Options for the `build` action beyond the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Disable the engine's layer cache.
    pub no_cache: bool,
}

/// What to do once the container is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Exec the configured shell attached to the caller's terminal.
    Interactive,
    /// Leave the container running in the background.
    Detached,
}

/// Options for the `run` action beyond the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// `--mount HOST[:CONTAINER]`.
    pub mount: Option<String>,
    /// `--blastdb HOST[:CONTAINER]`.
    pub blastdb: Option<String>,
    /// `--blastdb-env VALUE`.
    pub blastdb_env: Option<String>,
    /// Remove an existing container before creating a fresh one.
    pub recreate: bool,
    /// Attach or leave detached.
    pub session: SessionMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mount: None,
            blastdb: None,
            blastdb_env: None,
            recreate: false,
            session: SessionMode::Detached,
        }
    }
}

/// Mounts that passed validation and host checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMounts {
    /// Primary data mount.
    pub data: MountSpec,
    /// BLAST database mount and its environment variable.
    pub blastdb: BlastDbSpec,
}

/// Result of a successful `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// An interactive session ran and exited with this status.
    Attached {
        /// Exit status of the session.
        exit_code: i32,
    },
    /// The container was left running in the background.
    Detached,
}

/// How the named container was brought up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provision {
    Created,
    Started,
    Reused,
}

/// Drives one action against a container engine.
pub struct Launcher<'a, E: ContainerEngine + ?Sized> {
    engine: &'a E,
    config: &'a LauncherConfig,
}

impl<'a, E: ContainerEngine + ?Sized> Launcher<'a, E> {
    /// Creates a launcher for one invocation.
    #[must_use]
    pub const fn new(engine: &'a E, config: &'a LauncherConfig) -> Self {
        Self { engine, config }
    }

    fn container_name(&self) -> ContainerName {
        ContainerName::new(&self.config.container_name)
    }

    /// Builds the image.
    ///
    /// # Errors
    ///
    /// Returns `MissingArtifact` before probing the engine, engine probe
    /// errors before building, then any build failure.
    pub fn build(&self, options: BuildOptions) -> Result<()> {
        let _ = preflight::check_artifacts(&self.config.build)?;
        self.engine.probe()?;
        self.engine.build_image(&self.build_request(options))
    }

    /// Assembles the build request from configuration.
    #[must_use]
    pub fn build_request(&self, options: BuildOptions) -> BuildRequest {
        let build = &self.config.build;
        let mut build_args = build.args.clone();
        let _ = build_args.insert(
            constants::ARTIFACT_A_BUILD_ARG.into(),
            build.artifact_a.display().to_string(),
        );
        let _ = build_args.insert(
            constants::ARTIFACT_B_BUILD_ARG.into(),
            build.artifact_b.display().to_string(),
        );
        BuildRequest {
            tag: self.config.image_tag.clone(),
            context: build.context.clone(),
            dockerfile: build.context.join(&build.dockerfile),
            no_cache: options.no_cache,
            build_args,
        }
    }

    /// Resolves both mounts and checks the BLAST database directory.
    ///
    /// Touches neither the engine nor the filesystem beyond existence
    /// checks.
    ///
    /// # Errors
    ///
    /// Returns `MalformedMountSpec`, `ProtectedMountTarget` or
    /// `MissingDirectory`.
    pub fn resolve_mounts(&self, options: &RunOptions) -> Result<ResolvedMounts> {
        let data = MountResolver::from_config(&self.config.data_mount)
            .resolve(options.mount.as_deref())?;
        let blastdb = BlastDbResolver::from_config(&self.config.blastdb)
            .resolve(options.blastdb.as_deref(), options.blastdb_env.as_deref())?;
        preflight::require_directory(preflight::BLASTDB_KIND, &blastdb.mount.host_path)?;
        tracing::debug!(data = %data, blastdb = %blastdb.mount, "mounts resolved");
        Ok(ResolvedMounts { data, blastdb })
    }

    /// Creates or reuses the named container and optionally attaches to it.
    ///
    /// # Errors
    ///
    /// Returns validation errors from [`Launcher::resolve_mounts`], engine
    /// probe errors, then any engine failure.
    pub fn run(&self, options: &RunOptions) -> Result<RunOutcome> {
        let mounts = self.resolve_mounts(options)?;
        self.engine.probe()?;
        self.launch(&mounts, options)
    }

    /// Builds the image, then runs it.
    ///
    /// Run preconditions are checked before the build starts.
    ///
    /// # Errors
    ///
    /// Returns the first failing precondition or engine error.
    pub fn build_and_run(&self, build: BuildOptions, run: &RunOptions) -> Result<RunOutcome> {
        let mounts = self.resolve_mounts(run)?;
        self.build(build)?;
        self.launch(&mounts, run)
    }

    /// Removes the named container.
    ///
    /// Returns `false` when no such container existed.
    ///
    /// # Errors
    ///
    /// Returns engine probe errors or a failed removal.
    pub fn remove(&self) -> Result<bool> {
        self.engine.probe()?;
        let name = self.container_name();
        if self.engine.container_status(&name)? == ContainerStatus::Missing {
            tracing::info!(name = %name, "no container to remove");
            return Ok(false);
        }
        self.engine.remove_container(&name)?;
        Ok(true)
    }

    fn launch(&self, mounts: &ResolvedMounts, options: &RunOptions) -> Result<RunOutcome> {
        let data_dir = &mounts.data.host_path;
        if self.engine.is_dry_run() {
            if !data_dir.is_dir() {
                tracing::info!(path = %data_dir.display(), "dry run: data directory would be created");
            }
        } else {
            let _ = preflight::ensure_directory(data_dir)?;
        }

        let name = self.container_name();
        let provision = self.provision(&name, mounts, options)?;
        tracing::info!(name = %name, ?provision, "container ready");

        match options.session {
            SessionMode::Interactive => {
                let shell = vec![self.config.shell.clone()];
                let exit_code = self.engine.exec_interactive(&name, &shell)?;
                Ok(RunOutcome::Attached { exit_code })
            }
            SessionMode::Detached => Ok(RunOutcome::Detached),
        }
    }

    fn provision(
        &self,
        name: &ContainerName,
        mounts: &ResolvedMounts,
        options: &RunOptions,
    ) -> Result<Provision> {
        let mut status = self.engine.container_status(name)?;
        if options.recreate && status != ContainerStatus::Missing {
            self.engine.remove_container(name)?;
            status = ContainerStatus::Missing;
        }

        match status {
            ContainerStatus::Missing => {
                self.engine.create_container(&self.create_request(name, mounts)?)?;
                self.engine.start_container(name)?;
                Ok(Provision::Created)
            }
            ContainerStatus::Stopped => {
                warn_if_mounts_ignored(name, options);
                self.engine.start_container(name)?;
                Ok(Provision::Started)
            }
            ContainerStatus::Running => {
                warn_if_mounts_ignored(name, options);
                Ok(Provision::Reused)
            }
        }
    }

    fn create_request(&self, name: &ContainerName, mounts: &ResolvedMounts) -> Result<CreateRequest> {
        let mut env: BTreeMap<String, String> = self.config.extra_env.clone();
        let _ = env.insert(
            mounts.blastdb.env_name.clone(),
            mounts.blastdb.env_value.clone(),
        );
        Ok(CreateRequest {
            name: name.clone(),
            image: self.config.image_tag.clone(),
            mounts: vec![
                absolute_mount(&mounts.data)?,
                absolute_mount(&mounts.blastdb.mount)?,
            ],
            env,
        })
    }
}

fn warn_if_mounts_ignored(name: &ContainerName, options: &RunOptions) {
    if options.mount.is_some() || options.blastdb.is_some() || options.blastdb_env.is_some() {
        tracing::warn!(
            name = %name,
            "container already exists; mount and environment flags only apply on creation (use --recreate)"
        );
    }
}

/// Engines treat a relative host path as a named volume, so bind mounts
/// are passed with absolute host paths.
fn absolute_mount(mount: &MountSpec) -> Result<MountSpec> {
    Ok(MountSpec {
        host_path: absolute(&mount.host_path)?,
        ..mount.clone()
    })
}

fn absolute(path: &Path) -> Result<std::path::PathBuf> {
    std::path::absolute(path).map_err(|e| EdnaError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
