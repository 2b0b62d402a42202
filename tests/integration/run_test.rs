//! Integration tests for the `run` action.
//!
//! These tests are implemented in:
//! `crates/edna-runtime/tests/launcher_test.rs` and
//! `crates/edna-cli/tests/cli_test.rs`
//!
//! Covered scenarios:
//! - `run_without_flags_creates_data_dir_and_container`: Default data directory is auto-created
//! - `run_with_missing_blastdb_aborts_before_engine`: Missing BLAST-DB directory aborts with no engine call
//! - `run_with_protected_mount_has_no_side_effects`: Protected target rejected before any side effect
//! - `run_with_unreachable_engine_creates_nothing`: Engine probe failure leaves the host untouched
//! - `run_starts_stopped_container_without_recreating`: Stopped container is started, not recreated
//! - `run_reuses_running_container_and_attaches`: Running container reused; shell exit status returned
//! - `run_recreate_removes_existing_container_first`: `--recreate` removes before creating
//! - `missing_blastdb_exit_status_and_no_data_dir`: Exit status 15 from the binary
//! - `dry_run_prints_create_and_start_without_touching_host`: Dry run prints the engine command lines and creates no host directory
