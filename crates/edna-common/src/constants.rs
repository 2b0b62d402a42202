//! Built-in defaults and well-known paths.
//!
//! These values seed [`LauncherConfig::default`](crate::config::LauncherConfig);
//! nothing reads them directly at runtime.

/// Install root of the eDNA application inside the image.
///
/// The image build places the pipeline here, so a user mount must never
/// cover it.
pub const APP_INSTALL_ROOT: &str = "/opt/eDNA";

/// Default image tag used by `build` and `run`.
pub const DEFAULT_IMAGE_TAG: &str = "edna:latest";

/// Name of the single long-lived container managed by `run`.
pub const DEFAULT_CONTAINER_NAME: &str = "edna";

/// Container engine binary looked up on `PATH`.
pub const DEFAULT_ENGINE_BINARY: &str = "docker";

/// Dockerfile path, relative to the build context.
pub const DEFAULT_DOCKERFILE: &str = "Dockerfile";

/// Build context directory.
pub const DEFAULT_BUILD_CONTEXT: &str = ".";

/// First externally supplied installer archive expected in the build context.
pub const DEFAULT_ARTIFACT_A: &str = "artifact-a.tar.gz";

/// Second externally supplied installer archive expected in the build context.
pub const DEFAULT_ARTIFACT_B: &str = "artifact-b.tar.gz";

/// Build argument carrying the first artifact's file name.
pub const ARTIFACT_A_BUILD_ARG: &str = "ARTIFACT_A";

/// Build argument carrying the second artifact's file name.
pub const ARTIFACT_B_BUILD_ARG: &str = "ARTIFACT_B";

/// Default host directory for the primary data mount.
pub const DEFAULT_DATA_HOST_DIR: &str = "data";

/// Default container directory for the primary data mount.
pub const DEFAULT_DATA_CONTAINER_DIR: &str = "/data";

/// Default host directory holding BLAST databases.
pub const DEFAULT_BLASTDB_HOST_DIR: &str = "blastdb";

/// Default container directory for the BLAST database mount.
pub const DEFAULT_BLASTDB_CONTAINER_DIR: &str = "/blastdb";

/// Environment variable BLAST reads to locate its databases.
pub const BLASTDB_ENV_VAR: &str = "BLASTDB";

/// Default value of [`BLASTDB_ENV_VAR`] inside the container.
pub const DEFAULT_BLASTDB_ENV_VALUE: &str = "/blastdb";

/// Shell started for interactive sessions.
pub const DEFAULT_SHELL: &str = "/bin/bash";
