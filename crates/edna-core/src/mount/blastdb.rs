//! BLAST database mount resolution.

use std::collections::BTreeSet;
use std::path::PathBuf;

use edna_common::config::BlastDbConfig;
use edna_common::error::Result;
use edna_common::types::BlastDbSpec;

/// Resolves the BLAST database mount and the environment variable that
/// points BLAST at it.
///
/// Parsing follows [`super::resolve`] with no protected targets. The
/// variable's value is never derived from the resolved container path: a
/// `--blastdb /refs:/db` without a matching `--blastdb-env /db` leaves
/// BLAST looking at the configured value.
#[derive(Debug, Clone)]
pub struct BlastDbResolver {
    default_host: PathBuf,
    default_container: String,
    env_name: String,
    env_value: String,
}

impl BlastDbResolver {
    /// Creates a resolver from the BLAST database section of the configuration.
    #[must_use]
    pub fn from_config(config: &BlastDbConfig) -> Self {
        Self {
            default_host: config.default_host.clone(),
            default_container: config.default_container.clone(),
            env_name: config.env_name.clone(),
            env_value: config.env_value.clone(),
        }
    }

    /// Resolves an optional `HOST[:CONTAINER]` string and an optional
    /// override for the environment variable value.
    ///
    /// # Errors
    ///
    /// Returns [`edna_common::error::EdnaError::MalformedMountSpec`] for a
    /// blank host or container part.
    pub fn resolve(&self, raw: Option<&str>, env_override: Option<&str>) -> Result<BlastDbSpec> {
        let mount = super::resolve(
            raw,
            &self.default_host,
            &self.default_container,
            &BTreeSet::new(),
        )?;
        let env_value = env_override.map_or_else(|| self.env_value.clone(), str::to_owned);
        Ok(BlastDbSpec {
            mount,
            env_name: self.env_name.clone(),
            env_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use edna_common::error::EdnaError;

    use super::*;

    fn resolver() -> BlastDbResolver {
        BlastDbResolver::from_config(&BlastDbConfig::default())
    }

    #[test]
    fn defaults_when_nothing_given() {
        let spec = resolver().resolve(None, None).unwrap();
        assert_eq!(spec.mount.host_path, PathBuf::from("blastdb"));
        assert_eq!(spec.mount.container_path, "/blastdb");
        assert_eq!(spec.env_name, "BLASTDB");
        assert_eq!(spec.env_value, "/blastdb");
    }

    #[test]
    fn install_root_is_not_protected_here() {
        let spec = resolver().resolve(Some("/refs:/opt/eDNA"), None).unwrap();
        assert_eq!(spec.mount.container_path, "/opt/eDNA");
    }

    #[test]
    fn env_value_is_not_derived_from_mount() {
        let spec = resolver().resolve(Some("/refs:/db"), None).unwrap();
        assert_eq!(spec.mount.container_path, "/db");
        assert_eq!(spec.env_value, "/blastdb");
    }

    #[test]
    fn env_override_is_passed_through() {
        let spec = resolver().resolve(None, Some("/db:/extra")).unwrap();
        assert_eq!(spec.env_value, "/db:/extra");
        assert_eq!(spec.mount.container_path, "/blastdb");
    }

    #[test]
    fn malformed_spec_is_rejected() {
        let err = resolver().resolve(Some("/refs:"), None).unwrap_err();
        assert!(matches!(err, EdnaError::MalformedMountSpec { .. }), "got: {err}");
    }
}
