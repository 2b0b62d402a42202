//! Engine backend that shells out to a Docker-compatible CLI.

use std::process::{Command, Output, Stdio};

use edna_common::error::{EdnaError, Result};
use edna_common::types::{ContainerName, ContainerStatus};

use super::{BuildRequest, ContainerEngine, CreateRequest};
use crate::command;

/// Drives `docker`, `podman`, or any binary accepting the same
/// subcommands.
#[derive(Debug, Clone)]
pub struct CliEngine {
    binary: String,
}

impl CliEngine {
    /// Creates a backend for the given engine binary.
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> EdnaError {
        if e.kind() == std::io::ErrorKind::NotFound {
            EdnaError::EngineNotFound {
                binary: self.binary.clone(),
            }
        } else {
            EdnaError::Io {
                path: self.binary.clone().into(),
                source: e,
            }
        }
    }

    /// Runs a command capturing its output, without checking the status.
    fn capture(&self, args: &[String]) -> Result<Output> {
        tracing::debug!(cmd = %command::render(&self.binary, args), "running engine command");
        Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))
    }

    /// Runs a command capturing its output and fails on a non-zero status.
    fn capture_checked(&self, args: &[String]) -> Result<String> {
        let output = self.capture(args)?;
        if !output.status.success() {
            return Err(EdnaError::EngineCommand {
                command: command::render(&self.binary, args),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Runs a command attached to the caller's terminal and returns its
    /// exit status.
    fn attached(&self, args: &[String]) -> Result<i32> {
        tracing::debug!(cmd = %command::render(&self.binary, args), "running attached engine command");
        let status = Command::new(&self.binary)
            .args(args)
            .status()
            .map_err(|e| self.spawn_error(e))?;
        Ok(status.code().unwrap_or(-1))
    }

    fn attached_checked(&self, args: &[String]) -> Result<()> {
        let code = self.attached(args)?;
        if code == 0 {
            Ok(())
        } else {
            Err(EdnaError::EngineCommand {
                command: command::render(&self.binary, args),
                code,
                stderr: String::new(),
            })
        }
    }
}

impl ContainerEngine for CliEngine {
    fn binary(&self) -> &str {
        &self.binary
    }

    fn probe(&self) -> Result<()> {
        let path = which::which(&self.binary).map_err(|_| EdnaError::EngineNotFound {
            binary: self.binary.clone(),
        })?;
        tracing::debug!(path = %path.display(), "engine binary located");

        let output = self.capture(&["info".to_owned()])?;
        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr
                .lines()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("`info` returned a non-zero status")
                .trim()
                .to_owned();
            Err(EdnaError::EngineUnreachable {
                binary: self.binary.clone(),
                detail,
            })
        }
    }

    fn build_image(&self, request: &BuildRequest) -> Result<()> {
        tracing::info!(tag = %request.tag, context = %request.context.display(), "building image");
        self.attached_checked(&command::build_args(request))
    }

    fn container_status(&self, name: &ContainerName) -> Result<ContainerStatus> {
        let args = command::inspect_args(name);
        let output = self.capture(&args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if reports_missing_container(&stderr) {
                return Ok(ContainerStatus::Missing);
            }
            return Err(EdnaError::EngineCommand {
                command: command::render(&self.binary, &args),
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_owned(),
            });
        }
        Ok(parse_running_flag(&String::from_utf8_lossy(&output.stdout)))
    }

    fn create_container(&self, request: &CreateRequest) -> Result<()> {
        tracing::info!(name = %request.name, image = %request.image, "creating container");
        let _ = self.capture_checked(&command::create_args(request))?;
        Ok(())
    }

    fn start_container(&self, name: &ContainerName) -> Result<()> {
        tracing::info!(name = %name, "starting container");
        let _ = self.capture_checked(&command::start_args(name))?;
        Ok(())
    }

    fn remove_container(&self, name: &ContainerName) -> Result<()> {
        tracing::info!(name = %name, "removing container");
        let _ = self.capture_checked(&command::remove_args(name))?;
        Ok(())
    }

    fn exec_interactive(&self, name: &ContainerName, cmd: &[String]) -> Result<i32> {
        tracing::info!(name = %name, cmd = ?cmd, "attaching interactive session");
        self.attached(&command::exec_args(name, cmd))
    }
}

/// Whether a failed `inspect` means the container does not exist.
///
/// Docker prints `No such container`, Podman `no such container`.
fn reports_missing_container(stderr: &str) -> bool {
    stderr.to_lowercase().contains("no such")
}

/// Interprets the output of `inspect --format {{.State.Running}}`.
fn parse_running_flag(stdout: &str) -> ContainerStatus {
    if stdout.trim().eq_ignore_ascii_case("true") {
        ContainerStatus::Running
    } else {
        ContainerStatus::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_flag_parsing() {
        assert_eq!(parse_running_flag("true\n"), ContainerStatus::Running);
        assert_eq!(parse_running_flag("false\n"), ContainerStatus::Stopped);
        assert_eq!(parse_running_flag(""), ContainerStatus::Stopped);
    }

    #[test]
    fn inspect_failure_classification() {
        assert!(reports_missing_container(
            "Error response from daemon: No such container: edna\n"
        ));
        assert!(reports_missing_container(
            "Error: no such container \"edna\"\n"
        ));
        assert!(!reports_missing_container(
            "Cannot connect to the Docker daemon at unix:///var/run/docker.sock\n"
        ));
        assert!(!reports_missing_container(""));
    }

    #[test]
    fn probe_reports_missing_binary() {
        let engine = CliEngine::new("ednactl-test-no-such-engine");
        let err = engine.probe().unwrap_err();
        assert!(matches!(err, EdnaError::EngineNotFound { .. }), "got: {err}");
    }

    #[test]
    fn spawn_of_missing_binary_is_engine_not_found() {
        let engine = CliEngine::new("ednactl-test-no-such-engine");
        let err = engine
            .container_status(&ContainerName::new("edna"))
            .unwrap_err();
        assert!(matches!(err, EdnaError::EngineNotFound { .. }), "got: {err}");
    }

    #[cfg(unix)]
    #[test]
    fn failing_info_is_engine_unreachable() {
        // `false` ignores its arguments and exits 1.
        let engine = CliEngine::new("false");
        let err = engine.probe().unwrap_err();
        assert!(matches!(err, EdnaError::EngineUnreachable { .. }), "got: {err}");
    }
}
