//! # edna-common
//!
//! Shared error taxonomy, exit codes, configuration model, constants and
//! mount types used across the ednactl workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod exit;
pub mod types;
