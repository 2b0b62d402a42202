//! Mount specification resolution.
//!
//! A mount string has the form `HOST` or `HOST:CONTAINER`. Only the first
//! `:` separates the two parts; anything after it belongs to the container
//! path verbatim.

pub mod blastdb;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use edna_common::config::DataMountConfig;
use edna_common::error::{EdnaError, Result};
use edna_common::types::MountSpec;

pub use blastdb::BlastDbResolver;

/// Resolves the primary data mount against configured defaults and the
/// set of protected container paths.
#[derive(Debug, Clone)]
pub struct MountResolver {
    default_host: PathBuf,
    default_container: String,
    protected: BTreeSet<String>,
}

impl MountResolver {
    /// Creates a resolver from explicit defaults.
    #[must_use]
    pub fn new(
        default_host: impl Into<PathBuf>,
        default_container: impl Into<String>,
        protected: BTreeSet<String>,
    ) -> Self {
        Self {
            default_host: default_host.into(),
            default_container: default_container.into(),
            protected,
        }
    }

    /// Creates a resolver from the data mount section of the configuration.
    #[must_use]
    pub fn from_config(config: &DataMountConfig) -> Self {
        Self::new(
            config.default_host.clone(),
            config.default_container.clone(),
            config.protected.clone(),
        )
    }

    /// Resolves a user-supplied mount string.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, raw: Option<&str>) -> Result<MountSpec> {
        resolve(
            raw,
            &self.default_host,
            &self.default_container,
            &self.protected,
        )
    }
}

/// Resolves an optional `HOST[:CONTAINER]` string into a [`MountSpec`].
///
/// An absent or empty `raw` yields the defaults unchanged. The defaults are
/// trusted and never checked against `protected`. A `HOST` without a
/// separator mounts onto `default_container`. Only a container path given
/// explicitly by the user can hit a protected target; the comparison ignores
/// one trailing `/`.
///
/// # Errors
///
/// - [`EdnaError::MalformedMountSpec`] if either side of the separator is
///   blank, or a bare `HOST` is blank.
/// - [`EdnaError::ProtectedMountTarget`] if the explicit container path is
///   in `protected`.
pub fn resolve(
    raw: Option<&str>,
    default_host: &Path,
    default_container: &str,
    protected: &BTreeSet<String>,
) -> Result<MountSpec> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(MountSpec {
            raw: None,
            host_path: default_host.to_path_buf(),
            container_path: default_container.to_owned(),
        });
    };

    let (host, container) = split_spec(raw)?;
    let Some(container) = container else {
        tracing::debug!(raw, container = default_container, "mount uses default target");
        return Ok(MountSpec {
            raw: Some(raw.to_owned()),
            host_path: PathBuf::from(host),
            container_path: default_container.to_owned(),
        });
    };

    let target = strip_trailing_slash(container);
    if protected.iter().any(|p| strip_trailing_slash(p) == target) {
        return Err(EdnaError::ProtectedMountTarget {
            raw: raw.to_owned(),
            target: target.to_owned(),
        });
    }

    Ok(MountSpec {
        raw: Some(raw.to_owned()),
        host_path: PathBuf::from(host),
        container_path: container.to_owned(),
    })
}

/// Splits on the first `:` and rejects blank parts.
fn split_spec(raw: &str) -> Result<(&str, Option<&str>)> {
    let (host, container) = match raw.split_once(':') {
        Some((host, container)) => (host, Some(container)),
        None => (raw, None),
    };
    if host.trim().is_empty() {
        return Err(malformed(raw, "host path is empty"));
    }
    if container.is_some_and(|c| c.trim().is_empty()) {
        return Err(malformed(raw, "container path is empty"));
    }
    Ok((host, container))
}

fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

fn malformed(raw: &str, reason: &'static str) -> EdnaError {
    EdnaError::MalformedMountSpec {
        raw: raw.to_owned(),
        reason,
    }
}
