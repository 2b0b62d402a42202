//! Integration tests for the `build` and `build-and-run` actions.
//!
//! These tests are implemented in:
//! `crates/edna-runtime/tests/launcher_test.rs` and
//! `crates/edna-cli/tests/cli_test.rs`
//!
//! Covered scenarios:
//! - `build_with_missing_artifacts_never_calls_engine`: Missing artifact aborts before the engine probe
//! - `build_passes_artifacts_and_cache_flag`: Artifact names reach the build as build arguments
//! - `build_with_unreachable_engine_does_not_build`: Probe failure stops the build
//! - `build_and_run_checks_mounts_before_building`: Run preconditions are checked before building
//! - `missing_artifact_exit_status`: Exit status 12 from the binary
//! - `missing_engine_exit_status`: Exit status 10 from the binary
