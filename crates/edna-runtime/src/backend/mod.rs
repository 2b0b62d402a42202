//! Container engine abstraction.

pub mod cli;
pub mod dry_run;

use std::collections::BTreeMap;
use std::path::PathBuf;

use edna_common::error::Result;
use edna_common::types::{ContainerName, ContainerStatus, MountSpec};

pub use cli::CliEngine;
pub use dry_run::DryRunEngine;

/// Parameters for an image build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Tag applied to the built image.
    pub tag: String,
    /// Build context directory.
    pub context: PathBuf,
    /// Dockerfile path, already joined onto the context.
    pub dockerfile: PathBuf,
    /// Disable the layer cache.
    pub no_cache: bool,
    /// `--build-arg` values.
    pub build_args: BTreeMap<String, String>,
}

/// Parameters for creating the named container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// Container name.
    pub name: ContainerName,
    /// Image tag to create from.
    pub image: String,
    /// Bind mounts with absolute host paths.
    pub mounts: Vec<MountSpec>,
    /// Environment passed to the container.
    pub env: BTreeMap<String, String>,
}

/// The operations `ednactl` needs from a container engine.
///
/// Implementors only translate calls into engine operations; ordering and
/// precondition checks belong to [`crate::launcher::Launcher`].
pub trait ContainerEngine: Send + Sync {
    /// Engine binary, for messages.
    fn binary(&self) -> &str;

    /// Whether calls are only recorded. The launcher then leaves the host
    /// filesystem untouched as well.
    fn is_dry_run(&self) -> bool {
        false
    }

    /// Checks that the engine is installed and its daemon answers.
    ///
    /// # Errors
    ///
    /// Returns `EngineNotFound` or `EngineUnreachable`.
    fn probe(&self) -> Result<()>;

    /// Builds an image.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine reports a failed build.
    fn build_image(&self, request: &BuildRequest) -> Result<()>;

    /// Reports whether the named container exists and is running.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be queried.
    fn container_status(&self, name: &ContainerName) -> Result<ContainerStatus>;

    /// Creates the named container without starting it.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails.
    fn create_container(&self, request: &CreateRequest) -> Result<()>;

    /// Starts a created or stopped container.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be started.
    fn start_container(&self, name: &ContainerName) -> Result<()>;

    /// Removes the named container, stopping it first if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if removal fails.
    fn remove_container(&self, name: &ContainerName) -> Result<()>;

    /// Runs `command` in the container attached to the caller's terminal
    /// and returns its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be started.
    fn exec_interactive(&self, name: &ContainerName, command: &[String]) -> Result<i32>;
}
