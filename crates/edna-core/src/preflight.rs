//! Host-side precondition checks.
//!
//! Run before any engine call so a failing invocation leaves no trace.

use std::path::{Path, PathBuf};

use edna_common::config::BuildConfig;
use edna_common::error::{EdnaError, Result};

/// Label used in [`EdnaError::MissingDirectory`] for the BLAST database mount.
pub const BLASTDB_KIND: &str = "BLAST database";

/// Checks that both installer artifacts are present in the build context.
///
/// Returns the checked paths in order.
///
/// # Errors
///
/// Returns [`EdnaError::MissingArtifact`] for the first artifact that is
/// not a regular file.
pub fn check_artifacts(build: &BuildConfig) -> Result<[PathBuf; 2]> {
    let paths = build.artifact_paths();
    for path in &paths {
        if !path.is_file() {
            return Err(EdnaError::MissingArtifact { path: path.clone() });
        }
        tracing::debug!(path = %path.display(), "build artifact present");
    }
    Ok(paths)
}

/// Checks that a host directory exists without creating it.
///
/// # Errors
///
/// Returns [`EdnaError::MissingDirectory`] if `path` is not a directory.
pub fn require_directory(kind: &'static str, path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(EdnaError::MissingDirectory {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// Creates a host directory (and its parents) if it does not exist.
///
/// Returns `true` when the directory was created by this call.
///
/// # Errors
///
/// Returns [`EdnaError::Io`] if creation fails, including when `path`
/// exists as a file.
pub fn ensure_directory(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path).map_err(|e| EdnaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "created host directory");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_in(dir: &Path) -> BuildConfig {
        BuildConfig {
            context: dir.to_path_buf(),
            ..BuildConfig::default()
        }
    }

    #[test]
    fn artifacts_present_passes() {
        let dir = tempfile::tempdir().unwrap();
        let build = build_in(dir.path());
        for path in build.artifact_paths() {
            std::fs::write(path, b"x").unwrap();
        }
        let checked = check_artifacts(&build).unwrap();
        assert!(checked.iter().all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn second_artifact_missing_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let build = build_in(dir.path());
        let [a, b] = build.artifact_paths();
        std::fs::write(&a, b"x").unwrap();

        let err = check_artifacts(&build).unwrap_err();
        assert!(
            matches!(err, EdnaError::MissingArtifact { ref path } if *path == b),
            "got: {err}"
        );
    }

    #[test]
    fn artifact_that_is_a_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let build = build_in(dir.path());
        for path in build.artifact_paths() {
            std::fs::create_dir(path).unwrap();
        }
        assert!(check_artifacts(&build).is_err());
    }

    #[test]
    fn require_directory_reports_kind() {
        let dir = tempfile::tempdir().unwrap();
        let err = require_directory(BLASTDB_KIND, &dir.path().join("absent")).unwrap_err();
        assert!(err.to_string().contains(BLASTDB_KIND), "got: {err}");
        assert!(require_directory(BLASTDB_KIND, dir.path()).is_ok());
    }

    #[test]
    fn ensure_directory_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("data");
        assert!(ensure_directory(&target).unwrap());
        assert!(target.is_dir());
        assert!(!ensure_directory(&target).unwrap());
    }

    #[test]
    fn ensure_directory_over_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("data");
        std::fs::write(&target, b"x").unwrap();
        let err = ensure_directory(&target).unwrap_err();
        assert!(matches!(err, EdnaError::Io { .. }), "got: {err}");
    }
}
