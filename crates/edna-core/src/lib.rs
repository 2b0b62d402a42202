//! # edna-core
//!
//! Turns user-supplied `HOST[:CONTAINER]` strings into validated mounts
//! and checks the host-side preconditions of each action before anything
//! touches the container engine.
//!
//! Everything here is synchronous and free of engine calls.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod mount;
pub mod preflight;
