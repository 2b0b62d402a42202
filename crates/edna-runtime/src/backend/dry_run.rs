//! Backend that records engine command lines instead of running them.

use std::sync::{Mutex, MutexGuard, PoisonError};

use edna_common::error::Result;
use edna_common::types::{ContainerName, ContainerStatus};

use super::{BuildRequest, ContainerEngine, CreateRequest};
use crate::command;

/// Records the command line of every mutating operation.
///
/// The probe always succeeds and the container is reported with a fixed
/// status, [`ContainerStatus::Missing`] unless set otherwise.
#[derive(Debug)]
pub struct DryRunEngine {
    binary: String,
    status: ContainerStatus,
    commands: Mutex<Vec<String>>,
}

impl DryRunEngine {
    /// Creates a dry-run backend rendering commands for `binary`.
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            status: ContainerStatus::Missing,
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Sets the status reported for the named container.
    #[must_use]
    pub const fn with_status(mut self, status: ContainerStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the command lines recorded so far.
    pub fn commands(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, args: &[String]) {
        let line = command::render(&self.binary, args);
        tracing::debug!(cmd = %line, "dry run");
        self.lock().push(line);
    }
}

impl ContainerEngine for DryRunEngine {
    fn binary(&self) -> &str {
        &self.binary
    }

    fn is_dry_run(&self) -> bool {
        true
    }

    fn probe(&self) -> Result<()> {
        Ok(())
    }

    fn build_image(&self, request: &BuildRequest) -> Result<()> {
        self.record(&command::build_args(request));
        Ok(())
    }

    fn container_status(&self, _name: &ContainerName) -> Result<ContainerStatus> {
        Ok(self.status)
    }

    fn create_container(&self, request: &CreateRequest) -> Result<()> {
        self.record(&command::create_args(request));
        Ok(())
    }

    fn start_container(&self, name: &ContainerName) -> Result<()> {
        self.record(&command::start_args(name));
        Ok(())
    }

    fn remove_container(&self, name: &ContainerName) -> Result<()> {
        self.record(&command::remove_args(name));
        Ok(())
    }

    fn exec_interactive(&self, name: &ContainerName, cmd: &[String]) -> Result<i32> {
        self.record(&command::exec_args(name, cmd));
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let engine = DryRunEngine::new("podman");
        let name = ContainerName::new("edna");
        engine.start_container(&name).unwrap();
        engine.remove_container(&name).unwrap();
        assert_eq!(
            engine.commands(),
            ["podman start edna", "podman rm --force edna"]
        );
    }

    #[test]
    fn status_is_configurable() {
        let engine = DryRunEngine::new("docker").with_status(ContainerStatus::Running);
        let status = engine.container_status(&ContainerName::new("edna")).unwrap();
        assert_eq!(status, ContainerStatus::Running);
    }
}
