//! Launcher configuration model.
//!
//! Defaults come from [`crate::constants`]. A JSON file may override any
//! subset of fields; command-line flags are applied on top by the CLI.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{EdnaError, Result};

/// Root configuration for a single `ednactl` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Image tag built by `build` and launched by `run`.
    pub image_tag: String,
    /// Name of the long-lived container.
    pub container_name: String,
    /// Container engine binary (`docker`, `podman`, or a path).
    pub engine_binary: String,
    /// Shell exec'd for interactive sessions.
    pub shell: String,
    /// Image build settings.
    pub build: BuildConfig,
    /// Primary data mount defaults.
    pub data_mount: DataMountConfig,
    /// BLAST database mount defaults.
    pub blastdb: BlastDbConfig,
    /// Additional environment passed into the container.
    pub extra_env: BTreeMap<String, String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            image_tag: constants::DEFAULT_IMAGE_TAG.into(),
            container_name: constants::DEFAULT_CONTAINER_NAME.into(),
            engine_binary: constants::DEFAULT_ENGINE_BINARY.into(),
            shell: constants::DEFAULT_SHELL.into(),
            build: BuildConfig::default(),
            data_mount: DataMountConfig::default(),
            blastdb: BlastDbConfig::default(),
            extra_env: BTreeMap::new(),
        }
    }
}

/// Image build settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build context directory; artifacts are looked up here.
    pub context: PathBuf,
    /// Dockerfile, relative to the context.
    pub dockerfile: PathBuf,
    /// First installer artifact, relative to the context.
    pub artifact_a: PathBuf,
    /// Second installer artifact, relative to the context.
    pub artifact_b: PathBuf,
    /// Extra `--build-arg` values.
    pub args: BTreeMap<String, String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            context: PathBuf::from(constants::DEFAULT_BUILD_CONTEXT),
            dockerfile: PathBuf::from(constants::DEFAULT_DOCKERFILE),
            artifact_a: PathBuf::from(constants::DEFAULT_ARTIFACT_A),
            artifact_b: PathBuf::from(constants::DEFAULT_ARTIFACT_B),
            args: BTreeMap::new(),
        }
    }
}

impl BuildConfig {
    /// Returns the artifact paths joined onto the build context.
    #[must_use]
    pub fn artifact_paths(&self) -> [PathBuf; 2] {
        [
            self.context.join(&self.artifact_a),
            self.context.join(&self.artifact_b),
        ]
    }
}

/// Defaults and protections for the primary data mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataMountConfig {
    /// Host directory used when no `--mount` is given. Created if missing.
    pub default_host: PathBuf,
    /// Container directory used when none is given.
    pub default_container: String,
    /// Container paths a user mount may not target.
    pub protected: BTreeSet<String>,
}

impl Default for DataMountConfig {
    fn default() -> Self {
        Self {
            default_host: PathBuf::from(constants::DEFAULT_DATA_HOST_DIR),
            default_container: constants::DEFAULT_DATA_CONTAINER_DIR.into(),
            protected: BTreeSet::from([constants::APP_INSTALL_ROOT.to_owned()]),
        }
    }
}

/// Defaults for the BLAST database mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlastDbConfig {
    /// Host directory used when no `--blastdb` is given. Must already exist.
    pub default_host: PathBuf,
    /// Container directory used when none is given.
    pub default_container: String,
    /// Name of the environment variable BLAST reads.
    pub env_name: String,
    /// Value of that variable inside the container.
    pub env_value: String,
}

impl Default for BlastDbConfig {
    fn default() -> Self {
        Self {
            default_host: PathBuf::from(constants::DEFAULT_BLASTDB_HOST_DIR),
            default_container: constants::DEFAULT_BLASTDB_CONTAINER_DIR.into(),
            env_name: constants::BLASTDB_ENV_VAR.into(),
            env_value: constants::DEFAULT_BLASTDB_ENV_VALUE.into(),
        }
    }
}

impl LauncherConfig {
    /// Loads configuration from an optional JSON file.
    ///
    /// Fields missing from the file keep their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// fails [`LauncherConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        tracing::debug!(path = %path.display(), "loading configuration file");
        let content = std::fs::read_to_string(path).map_err(|e| EdnaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that required values are present.
    ///
    /// # Errors
    ///
    /// Returns [`EdnaError::Config`] naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("image_tag", self.image_tag.as_str()),
            ("container_name", self.container_name.as_str()),
            ("engine_binary", self.engine_binary.as_str()),
            ("shell", self.shell.as_str()),
            ("data_mount.default_container", self.data_mount.default_container.as_str()),
            ("blastdb.default_container", self.blastdb.default_container.as_str()),
            ("blastdb.env_name", self.blastdb.env_name.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(EdnaError::Config {
                    message: format!("{field} cannot be empty"),
                });
            }
        }
        if self.data_mount.default_host.as_os_str().is_empty()
            || self.blastdb.default_host.as_os_str().is_empty()
        {
            return Err(EdnaError::Config {
                message: "default host directories cannot be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_protects_install_root() {
        let config = LauncherConfig::default();
        assert!(config.data_mount.protected.contains(constants::APP_INSTALL_ROOT));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let config = LauncherConfig::load(None).unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn load_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "image_tag": "edna:dev", "blastdb": {{ "env_value": "/refs" }} }}"#
        )
        .unwrap();

        let config = LauncherConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.image_tag, "edna:dev");
        assert_eq!(config.blastdb.env_value, "/refs");
        assert_eq!(config.blastdb.env_name, constants::BLASTDB_ENV_VAR);
        assert_eq!(config.container_name, constants::DEFAULT_CONTAINER_NAME);
    }

    #[test]
    fn load_full_file_with_every_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "image_tag": "edna:2.1",
                "container_name": "edna-lab",
                "engine_binary": "podman",
                "shell": "/bin/sh",
                "build": {{
                    "context": "ctx",
                    "dockerfile": "docker/Dockerfile",
                    "artifact_a": "tool-a.tgz",
                    "artifact_b": "tool-b.tgz",
                    "args": {{ "THREADS": "8" }}
                }},
                "data_mount": {{
                    "default_host": "work",
                    "default_container": "/work",
                    "protected": ["/opt/eDNA", "/usr/local"]
                }},
                "blastdb": {{
                    "default_host": "refs",
                    "default_container": "/refs",
                    "env_name": "BLASTDB",
                    "env_value": "/refs/nt"
                }},
                "extra_env": {{ "TZ": "UTC" }}
            }}"#
        )
        .unwrap();

        let config = LauncherConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.engine_binary, "podman");
        assert_eq!(config.shell, "/bin/sh");
        assert_eq!(
            config.build.artifact_paths(),
            [Path::new("ctx").join("tool-a.tgz"), Path::new("ctx").join("tool-b.tgz")]
        );
        assert_eq!(config.build.dockerfile, PathBuf::from("docker/Dockerfile"));
        assert_eq!(config.build.args.get("THREADS").map(String::as_str), Some("8"));
        assert_eq!(config.data_mount.default_host, PathBuf::from("work"));
        assert!(config.data_mount.protected.contains("/usr/local"));
        assert_eq!(config.blastdb.default_container, "/refs");
        assert_eq!(config.blastdb.env_value, "/refs/nt");
        assert_eq!(config.extra_env.get("TZ").map(String::as_str), Some("UTC"));
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "image_tga": "typo" }}"#).unwrap();

        let err = LauncherConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, EdnaError::Serialization { .. }), "got: {err}");
    }

    #[test]
    fn load_rejects_empty_container_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "container_name": " " }}"#).unwrap();

        let err = LauncherConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("container_name"), "got: {err}");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LauncherConfig::load(Some(dir.path().join("absent.json").as_path())).unwrap_err();
        assert!(matches!(err, EdnaError::Io { .. }));
    }

    #[test]
    fn artifact_paths_are_joined_to_context() {
        let build = BuildConfig {
            context: PathBuf::from("ctx"),
            ..BuildConfig::default()
        };
        let [a, b] = build.artifact_paths();
        assert_eq!(a, Path::new("ctx").join(constants::DEFAULT_ARTIFACT_A));
        assert_eq!(b, Path::new("ctx").join(constants::DEFAULT_ARTIFACT_B));
    }
}
