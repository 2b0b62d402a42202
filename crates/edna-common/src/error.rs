//! Unified error types for the ednactl workspace.
//!
//! Every failure that aborts an invocation is one of these variants. Each
//! maps to a distinct process exit status through [`EdnaError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

use crate::exit;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum EdnaError {
    /// A mount string could not be parsed into host and container parts.
    #[error("malformed mount spec \"{raw}\": {reason}")]
    MalformedMountSpec {
        /// The user-supplied string.
        raw: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A mount targets a container path that must not be covered.
    #[error("mount \"{raw}\" would hide {target} inside the container; choose another container path")]
    ProtectedMountTarget {
        /// The user-supplied string.
        raw: String,
        /// The protected container path it resolved to.
        target: String,
    },

    /// A file the image build copies from the build context is absent.
    #[error("required build artifact not found: {}", path.display())]
    MissingArtifact {
        /// Expected location of the artifact.
        path: PathBuf,
    },

    /// A host directory that is never created automatically is absent.
    #[error("{kind} directory not found on host: {}", path.display())]
    MissingDirectory {
        /// Which mount the directory belongs to.
        kind: &'static str,
        /// The missing host path.
        path: PathBuf,
    },

    /// The container engine binary is not installed or not on `PATH`.
    #[error("container engine `{binary}` not found; install it or pass --engine")]
    EngineNotFound {
        /// Binary that was looked up.
        binary: String,
    },

    /// The engine binary exists but its daemon does not answer.
    #[error("container engine `{binary}` is not reachable: {detail}")]
    EngineUnreachable {
        /// Binary that was probed.
        binary: String,
        /// Diagnostic from the probe.
        detail: String,
    },

    /// The command line could not be parsed.
    #[error("{message}")]
    UnknownArgument {
        /// Rendered usage error.
        message: String,
    },

    /// An engine operation ran but reported failure.
    #[error("`{command}` failed with status {code}: {stderr}")]
    EngineCommand {
        /// Rendered command line.
        command: String,
        /// Exit status, `-1` when killed by a signal.
        code: i32,
        /// Captured standard error, possibly empty.
        stderr: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl EdnaError {
    /// Returns the process exit status reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MalformedMountSpec { .. } => exit::MALFORMED_MOUNT_SPEC,
            Self::ProtectedMountTarget { .. } => exit::PROTECTED_MOUNT_TARGET,
            Self::MissingArtifact { .. } => exit::MISSING_ARTIFACT,
            Self::MissingDirectory { .. } => exit::MISSING_BLASTDB_DIRECTORY,
            Self::EngineNotFound { .. } => exit::ENGINE_NOT_FOUND,
            Self::EngineUnreachable { .. } => exit::ENGINE_UNREACHABLE,
            Self::UnknownArgument { .. } => exit::UNKNOWN_ARGUMENT,
            Self::EngineCommand { .. }
            | Self::Io { .. }
            | Self::Config { .. }
            | Self::Serialization { .. } => exit::FAILURE,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, EdnaError>;
