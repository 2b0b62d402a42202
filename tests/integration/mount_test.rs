//! Integration tests for mount specification resolution.
//!
//! These tests are implemented in:
//! `crates/edna-core/tests/resolver_props.rs`
//!
//! Covered scenarios:
//! - `prop_pair_is_split_on_first_colon`: `HOST:CONTAINER` keeps extra colons in CONTAINER
//! - `prop_host_only_mounts_default_target`: `HOST` alone mounts onto the default target
//! - `prop_defaults_never_protected`: Built-in defaults bypass the protected-target check
//! - `prop_resolution_is_idempotent`: Same input, same output
//! - `protected_target_examples`: `/x:/opt/eDNA` rejected, `/x:/opt/eDNA/sub` accepted
//! - `malformed_examples`: `:`, `/x:` and `:/y` rejected as malformed
