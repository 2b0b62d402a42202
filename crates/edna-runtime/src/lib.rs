//! Container engine integration for ednactl.
//!
//! The engine itself (Docker, Podman) is an external collaborator reached
//! through [`backend::ContainerEngine`]. [`launcher::Launcher`] checks every
//! precondition of an action before the first mutating engine call.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod backend;
pub mod command;
pub mod launcher;
