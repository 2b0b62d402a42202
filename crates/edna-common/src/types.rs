//! Domain primitive types used across the ednactl workspace.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name of the long-lived container managed by `ednactl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerName(String);

impl ContainerName {
    /// Creates a container name from a string value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved binding of a host path to a container path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSpec {
    /// The user-supplied string, `None` when built-in defaults were used.
    pub raw: Option<String>,
    /// Path on the launching machine, absolute or relative.
    pub host_path: PathBuf,
    /// Absolute path inside the container.
    pub container_path: String,
}

impl MountSpec {
    /// Returns whether this mount came from built-in defaults rather than
    /// user input.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.raw.is_none()
    }
}

impl fmt::Display for MountSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host_path.display(), self.container_path)
    }
}

/// The BLAST database mount plus the environment variable pointing BLAST
/// at it.
///
/// The variable's value is taken verbatim from configuration. Keeping it
/// consistent with `mount.container_path` is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlastDbSpec {
    /// The resolved mount.
    pub mount: MountSpec,
    /// Environment variable name, normally `BLASTDB`.
    pub env_name: String,
    /// Environment variable value passed into the container.
    pub env_value: String,
}

/// Observed state of the named container in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerStatus {
    /// No container with that name exists.
    Missing,
    /// The container exists but is not running.
    Stopped,
    /// The container is running.
    Running,
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Stopped => write!(f, "stopped"),
            Self::Running => write!(f, "running"),
        }
    }
}
